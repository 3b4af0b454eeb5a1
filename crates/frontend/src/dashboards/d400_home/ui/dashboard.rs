use crate::app::use_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::button::button_class;
use crate::shared::icons::icon;
use contracts::dashboards::d400_home::dto::{category_cards, home_stats, quick_links};
use leptos::prelude::*;

/// Landing page: headline numbers, shortcuts and featured categories
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let config = use_config();
    let greeting = format!("Welcome back, {}!", config.profile.first_name);

    view! {
        <div class="page home-dashboard">
            <PageHeader
                title="Affiliate Dashboard"
                subtitle=greeting
                icon_name="home"
            />

            <div class="card-grid card-grid--3">
                {home_stats()
                    .into_iter()
                    .map(|s| view! {
                        <StatCard
                            label=s.title
                            icon_name=s.icon
                            value=Signal::stored(s.value)
                            subtitle=s.description
                        />
                    })
                    .collect_view()}
            </div>

            <h2 class="section-title">"Quick Links"</h2>
            <div class="card-grid card-grid--3">
                {quick_links()
                    .into_iter()
                    .map(|link| view! {
                        <div class="card">
                            <div class="card__header">
                                <span class="card__icon">{icon(&link.icon)}</span>
                                <div>
                                    <h3 class="card__title">{link.title}</h3>
                                    <p class="card__subtitle">{link.subtitle}</p>
                                </div>
                            </div>
                            <p class="card__body">{link.body}</p>
                            <div class="card__footer">
                                <a class=button_class(Some("outline"), None) href=link.href>
                                    {link.action_label}
                                    {icon("chevron-right")}
                                </a>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <h2 class="section-title">"Featured Categories"</h2>
            <div class="card-grid card-grid--2">
                {category_cards()
                    .into_iter()
                    .map(|c| view! {
                        <div class="card card--media">
                            <img class="card__image" src=c.image_url alt=c.title.clone() />
                            <h3 class="card__title">{c.title}</h3>
                            <p class="card__subtitle">{c.subtitle}</p>
                            <p class="card__body">{c.body}</p>
                            <div class="card__footer">
                                <a class=button_class(None, None) href=c.href>
                                    {c.action_label}
                                </a>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
