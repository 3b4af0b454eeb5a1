//! UI pieces shared by list pages: the search box and the empty state

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box with a clear button. Every keystroke is forwarded.
#[component]
pub fn SearchInput(
    /// Current filter text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="form__input search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Centered message shown instead of rows
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon_name.map(icon)}
            <p class="empty-state__message">{message}</p>
            {hint.map(|h| view! { <p class="empty-state__hint">{h}</p> })}
        </div>
    }
}

