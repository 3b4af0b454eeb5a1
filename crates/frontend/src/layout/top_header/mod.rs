//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar collapse toggle
//! - Title of the current page
//! - Theme toggle
//! - User menu (settings, sign out)

use crate::app::use_config;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::shared::format::initials;
use contracts::shared::navigation::title_for_path;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let full_name = format!("{} {}", config.profile.first_name, config.profile.last_name);
    let avatar = initials(&full_name);
    let avatar_title = full_name.clone();
    let email = config.profile.email.clone();

    let title = move || title_for_path(&location.pathname.get()).unwrap_or_default();
    let is_sidebar_visible = move || ctx.left_open.get();

    let sign_out = move |_| {
        menu_open.set(false);
        log::info!("sign out (UI only)");
        navigate("/auth/signin", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Collapse sidebar" } else { "Expand sidebar" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <div class="top-header__user">
                    <button
                        class="top-header__avatar"
                        title=avatar_title
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        {avatar}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="top-header__menu" on:click=move |_| menu_open.set(false)>
                            <div class="top-header__menu-label">
                                <div>{full_name.clone()}</div>
                                <div class="top-header__menu-email">{email.clone()}</div>
                            </div>
                            <a class="top-header__menu-item" href="/settings">
                                {icon("settings")}
                                <span>"Settings"</span>
                            </a>
                        </div>
                    </Show>
                    <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                        {icon("log-out")}
                    </button>
                </div>
            </div>
        </header>
    }
}
