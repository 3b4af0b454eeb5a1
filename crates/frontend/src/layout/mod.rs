pub mod auth_layout;
pub mod chatbot;
pub mod global_context;
pub mod left;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |        TopHeader             |
/// |  (Left)   |------------------------------|
/// |           |        Content               |
/// |           |                  [Chatbot]   |
/// +------------------------------------------+
/// ```
///
/// The sidebar collapses to icons instead of disappearing.
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {center()}
                </main>
            </div>

            // floating panel, outside the scrolling content
            {right()}
        </div>
    }
}
