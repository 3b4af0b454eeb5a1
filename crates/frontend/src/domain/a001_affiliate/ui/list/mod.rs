use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::icons::icon;
use crate::shared::list_utils::{EmptyState, SearchInput};
use contracts::domain::a001_affiliate::aggregate::{Affiliate, AffiliateFilter};
use contracts::domain::a001_affiliate::seed::mock_affiliates;
use contracts::domain::common::ListView;
use contracts::shared::format::{format_money, format_thousands};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AffiliateRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub avatar_url: String,
    pub email: String,
    pub phone: String,
    pub join_date: String,
    pub total_sales: String,
    pub total_revenue: String,
    pub status: &'static str,
    pub status_variant: &'static str,
}

impl From<Affiliate> for AffiliateRow {
    fn from(a: Affiliate) -> Self {
        Self {
            initials: a.initials(),
            total_sales: format_thousands(a.total_sales as i64),
            total_revenue: format_money(a.total_revenue),
            status: a.status.as_str(),
            status_variant: a.status.badge_variant(),
            id: a.id,
            name: a.name,
            avatar_url: a.avatar_url,
            email: a.email,
            phone: a.phone,
            join_date: a.join_date,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AffiliateList() -> impl IntoView {
    let affiliates = StoredValue::new(mock_affiliates());
    let filter = RwSignal::new(AffiliateFilter::default());

    let view_list = Memo::new(move |_| {
        let f = filter.get();
        affiliates.with_value(|all| f.apply(all))
    });

    view! {
        <div class="page">
            <PageHeader title="All Affiliates" />

            <div class="card">
                <div class="card__header">
                    <span class="card__icon">{icon("users")}</span>
                    <div>
                        <h3 class="card__title">"Affiliate Roster"</h3>
                        <p class="card__subtitle">"Manage and view all registered affiliates."</p>
                    </div>
                </div>

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.search = v))
                        placeholder="Search by name or email..."
                    />
                    <Select
                        value=Signal::derive(move || filter.with(|f| f.status.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.status = v))
                        options=Signal::stored(AffiliateFilter::status_options())
                        class="filter-bar__select"
                    />
                </div>

                {move || match view_list.get() {
                    ListView::Empty(msg) => view! { <EmptyState message=msg /> }.into_any(),
                    ListView::Rows(rows) => view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Affiliate"</th>
                                        <th class="table__header-cell">"Contact"</th>
                                        <th class="table__header-cell">"Join Date"</th>
                                        <th class="table__header-cell table__header-cell--right">"Total Sales"</th>
                                        <th class="table__header-cell table__header-cell--right">"Total Revenue"</th>
                                        <th class="table__header-cell table__header-cell--center">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(AffiliateRow::from)
                                        .map(|row| view! {
                                            <tr class="table__row" data-id=row.id>
                                                <td class="table__cell">
                                                    <div class="avatar-cell">
                                                        <img class="avatar" src=row.avatar_url alt=row.initials />
                                                        <span class="avatar-cell__name">{row.name}</span>
                                                    </div>
                                                </td>
                                                <td class="table__cell">
                                                    <div class="muted">{row.email}</div>
                                                    <div class="muted">{row.phone}</div>
                                                </td>
                                                <td class="table__cell">{row.join_date}</td>
                                                <td class="table__cell table__cell--right">{row.total_sales}</td>
                                                <td class="table__cell table__cell--right">{row.total_revenue}</td>
                                                <td class="table__cell table__cell--center">
                                                    <Badge variant=row.status_variant>{row.status}</Badge>
                                                </td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
