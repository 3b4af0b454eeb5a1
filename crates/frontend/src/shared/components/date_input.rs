use chrono::NaiveDate;
use leptos::prelude::*;

const ISO_DATE: &str = "%Y-%m-%d";

/// Native date picker bound to a `NaiveDate`.
/// The browser shows the date in its locale; the value is always yyyy-mm-dd.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<NaiveDate>,
    /// Called only with dates that parse
    on_change: Callback<NaiveDate>,
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {move || label.get().map(|l| view! { <span class="date-input__label">{l}</span> })}
            <input
                type="date"
                class="form__input date-input__field"
                prop:value=move || value.get().format(ISO_DATE).to_string()
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match NaiveDate::parse_from_str(&raw, ISO_DATE) {
                        Ok(date) => on_change.run(date),
                        Err(e) => log::debug!("ignoring date input {:?}: {}", raw, e),
                    }
                }
            />
        </label>
    }
}
