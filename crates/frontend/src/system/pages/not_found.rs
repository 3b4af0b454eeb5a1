use crate::shared::components::ui::button::button_class;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <span class="not-found__icon">{icon("search")}</span>
            <h1 class="not-found__title">"Page not found"</h1>
            <p class="muted">"The page you are looking for does not exist or has been moved."</p>
            <a class=button_class(None, None) href="/dashboard">"Back to Dashboard"</a>
        </div>
    }
}
