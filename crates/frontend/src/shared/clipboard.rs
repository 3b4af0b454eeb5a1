//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures are reported, never fatal.

use crate::layout::toast_service::ToastService;
use contracts::shared::notification::Notification;
use wasm_bindgen_futures::spawn_local;

async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Copy text to clipboard and hand the outcome to `on_done`
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        on_done(write_text(&text).await);
    });
}

/// Copy a link and toast "Link Copied!" or "Failed to Copy"
pub fn copy_link(toast: ToastService, link: &str, success_description: &'static str) {
    copy_to_clipboard_with_callback(link, move |result| match result {
        Ok(()) => toast.notify(Notification::link_copied(success_description)),
        Err(e) => {
            log::warn!("clipboard write failed: {}", e);
            toast.notify(Notification::copy_failed());
        }
    });
}
