use crate::shared::icons::icon;
use leptos::prelude::*;

/// Status pill. Variants match the `badge_variant()` names of the domain enums.
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "outline" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Optional leading icon
    #[prop(optional)]
    icon_name: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        "outline" => "badge badge--outline",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {icon_name.map(icon)}
            {children()}
        </span>
    }
}
