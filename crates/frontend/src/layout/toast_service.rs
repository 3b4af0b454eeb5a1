use contracts::shared::config::NotificationConfig;
use contracts::shared::notification::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Queue of transient notifications shown in the corner of the screen
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    dismiss_after_ms: u32,
    max_visible: usize,
}

impl ToastService {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            dismiss_after_ms: config.dismiss_after_ms,
            max_visible: config.max_visible,
        }
    }

    /// Show a notification and schedule its removal
    pub fn notify(&self, notification: Notification) {
        log::debug!("toast: {}", notification.title);
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        let max_visible = self.max_visible;

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, notification });
            let overflow = toasts.len().saturating_sub(max_visible);
            toasts.drain(..overflow);
        });

        let toasts = self.toasts;
        let delay = self.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Stack of active toasts; a click dismisses one early
#[component]
pub fn ToastViewport() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-viewport">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    let class = if n.is_destructive() {
                        "toast toast--destructive"
                    } else {
                        "toast"
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{n.title.clone()}</div>
                            {n.description.clone().map(|d| view! {
                                <div class="toast__description">{d}</div>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
