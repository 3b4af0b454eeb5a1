use leptos::prelude::*;

/// On/off toggle rendered as a switch, with a label and an optional hint
#[component]
pub fn Switch(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Secondary line under the label
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let switch_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__switch-row">
            <label class="form__switch-text" for=switch_id>
                <span class="form__label">{label}</span>
                {move || hint.get().map(|h| view! {
                    <span class="form__hint">{h}</span>
                })}
            </label>
            <input
                id=switch_id
                type="checkbox"
                role="switch"
                class="form__switch"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </div>
    }
}
