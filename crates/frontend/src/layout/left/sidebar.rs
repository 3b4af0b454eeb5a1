//! Sidebar with the collapsible navigation tree

use crate::app::use_config;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::navigation::{footer_menu, main_menu, NavNode, NavState};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
fn NavLeaf(node: NavNode, #[prop(into)] path: Signal<String>, depth: usize) -> impl IntoView {
    let ctx = use_global_context();
    let node_for_active = node.clone();
    let is_active = move || node_for_active.is_active(&path.get());
    let padding = format!("{}px", 12 + depth * 14);

    view! {
        <a
            href=node.route
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            style:padding-left=padding
            title=node.label
        >
            <div class="app-sidebar__item-content">
                {icon(node.icon)}
                <Show when=move || ctx.left_open.get()>
                    <span>{node.label}</span>
                </Show>
            </div>
        </a>
    }
}

#[component]
fn NavGroup(
    node: NavNode,
    #[prop(into)] path: Signal<String>,
    nav_state: RwSignal<NavState>,
) -> impl IntoView {
    let ctx = use_global_context();
    let id = node.id;
    let node_for_active = node.clone();
    let is_active = move || node_for_active.is_active(&path.get());
    let is_expanded = move || nav_state.with(|s| s.is_open(id));
    let children = StoredValue::new(node.children.clone());

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                style:padding-left="12px"
                title=node.label
                on:click=move |_| nav_state.update(|s| s.toggle(id))
            >
                <div class="app-sidebar__item-content">
                    {icon(node.icon)}
                    <Show when=move || ctx.left_open.get()>
                        <span>{node.label}</span>
                    </Show>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {children
                        .get_value()
                        .into_iter()
                        .map(|child| view! { <NavLeaf node=child path=path depth=1 /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

fn render_nodes(nodes: Vec<NavNode>, path: Memo<String>, nav_state: RwSignal<NavState>) -> AnyView {
    nodes
        .into_iter()
        .map(|node| {
            if node.is_group() {
                view! { <NavGroup node=node path=path nav_state=nav_state /> }.into_any()
            } else {
                view! { <NavLeaf node=node path=path depth=0 /> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let config = use_config();
    let ctx = use_global_context();
    let location = use_location();
    let path = location.pathname;

    let menu = main_menu();
    // groups containing the landing path start expanded
    let nav_state = RwSignal::new(NavState::for_path(&menu, &path.get_untracked()));

    view! {
        <div class="app-sidebar__header">
            <a href="/dashboard" class="app-sidebar__brand">
                {icon("star")}
                <Show when=move || ctx.left_open.get()>
                    <span class="app-sidebar__brand-name">{config.app.name.clone()}</span>
                </Show>
            </a>
        </div>
        <nav class="app-sidebar__content">
            {render_nodes(menu, path, nav_state)}
        </nav>
        <div class="app-sidebar__footer">
            {render_nodes(footer_menu(), path, nav_state)}
        </div>
    }
}
