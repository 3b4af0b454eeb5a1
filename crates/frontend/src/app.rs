use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastService, ToastViewport};
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return view! {
                <div class="fatal-error">"Configuration error: " {e.to_string()}</div>
            }
            .into_any();
        }
    };

    provide_context(AppGlobalContext::new());

    // Toasts, one queue for every page
    provide_context(ToastService::new(&config.notifications));

    provide_context(config);

    view! {
        <ThemeProvider>
            <AppRoutes />
            <ToastViewport />
        </ThemeProvider>
    }
    .into_any()
}

/// Configuration provided by [`App`]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
