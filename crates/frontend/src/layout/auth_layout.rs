use crate::app::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Centered card used by the sign-in, sign-up and password reset screens
#[component]
pub fn AuthLayout() -> impl IntoView {
    let config = use_config();

    view! {
        <div class="auth-layout">
            <div class="auth-layout__card">
                <div class="auth-layout__logo">
                    {icon("star")}
                    <span>{config.app.name.clone()}</span>
                </div>
                <Outlet />
            </div>
        </div>
    }
}
