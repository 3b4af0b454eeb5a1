use leptos::prelude::*;

/// CSS classes for a variant/size pair; also used by links styled as buttons
pub fn button_class(variant: Option<&str>, size: Option<&str>) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "destructive" => "button--destructive",
        _ => "button--primary",
    };
    let size_class = match size {
        Some("sm") => "button--small",
        Some("icon") => "button--icon",
        _ => "",
    };
    format!("button {} {}", variant_class, size_class)
}

/// Button component with variants (primary, secondary, outline, ghost, destructive) and sizes (sm, md, icon)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "outline", "ghost" or "destructive"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "icon"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let base_class = move || button_class(variant.get().as_deref(), size.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("{} {}", base_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
