use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::list_utils::{EmptyState, SearchInput};
use contracts::domain::common::ListView;
use contracts::projections::p900_best_sellers::dto::{
    BestSellerFilter, BestSellerProduct, BestSellerTab, TopAffiliate, CATEGORY_OPTIONS,
};
use contracts::projections::p900_best_sellers::seed::{mock_best_sellers, mock_top_affiliates};
use contracts::shared::format::format_thousands;
use leptos::prelude::*;

fn revenue_label(revenue: u64) -> String {
    format!("${}", format_thousands(revenue as i64))
}

fn products_table(rows: Vec<BestSellerProduct>) -> AnyView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell table__header-cell--thumb">"Image"</th>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Category"</th>
                        <th class="table__header-cell table__header-cell--right">"Sales"</th>
                        <th class="table__header-cell table__header-cell--right">"Revenue"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|p| view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <img class="thumb" src=p.image_url alt=p.name.clone() />
                                </td>
                                <td class="table__cell table__cell--strong">{p.name}</td>
                                <td class="table__cell">{p.category}</td>
                                <td class="table__cell table__cell--right">{format_thousands(p.sales as i64)}</td>
                                <td class="table__cell table__cell--right">{revenue_label(p.revenue)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

fn affiliates_table(rows: Vec<TopAffiliate>) -> AnyView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell table__header-cell--thumb">"Avatar"</th>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell table__header-cell--right">"Sales"</th>
                        <th class="table__header-cell table__header-cell--right">"Revenue Generated"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|a| view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <img class="avatar" src=a.image_url alt=a.name.clone() />
                                </td>
                                <td class="table__cell table__cell--strong">{a.name}</td>
                                <td class="table__cell table__cell--right">{format_thousands(a.sales as i64)}</td>
                                <td class="table__cell table__cell--right">{revenue_label(a.revenue)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

/// Leaderboard of products or affiliates, switched by tab
#[component]
#[allow(non_snake_case)]
pub fn BestSellers() -> impl IntoView {
    let products = StoredValue::new(mock_best_sellers());
    let affiliates = StoredValue::new(mock_top_affiliates());
    let filter = RwSignal::new(BestSellerFilter::default());

    let tab = Memo::new(move |_| filter.with(|f| f.tab));
    let category_options: Vec<(String, String)> = CATEGORY_OPTIONS
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();

    let body = move || {
        let f = filter.get();
        match f.tab {
            BestSellerTab::Products => match products.with_value(|rows| f.products(rows)) {
                ListView::Rows(rows) => products_table(rows),
                ListView::Empty(msg) => view! { <EmptyState message=msg /> }.into_any(),
            },
            BestSellerTab::Affiliates => match affiliates.with_value(|rows| f.affiliates(rows)) {
                ListView::Rows(rows) => affiliates_table(rows),
                ListView::Empty(msg) => view! { <EmptyState message=msg /> }.into_any(),
            },
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Best Sellers">
                <Select
                    value=Signal::derive(move || tab.get().as_str().to_string())
                    on_change=Callback::new(move |v: String| filter.update(|f| f.tab = BestSellerTab::parse(&v)))
                    options=Signal::stored(BestSellerTab::options())
                    class="filter-bar__select"
                />
                <Show when=move || tab.get() == BestSellerTab::Products>
                    <Select
                        value=Signal::derive(move || filter.with(|f| f.category.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.category = v))
                        options=Signal::stored(category_options.clone())
                        class="filter-bar__select"
                    />
                </Show>
            </PageHeader>

            <div class="card">
                <div class="card__header">
                    <span class="card__icon">
                        {move || match tab.get() {
                            BestSellerTab::Products => icon("shopping-bag"),
                            BestSellerTab::Affiliates => icon("user"),
                        }}
                    </span>
                    <div>
                        <h3 class="card__title">{move || tab.get().title()}</h3>
                        <p class="card__subtitle">{move || tab.get().description()}</p>
                    </div>
                </div>
                {move || {
                    let placeholder = tab.get().search_placeholder();
                    view! {
                        <SearchInput
                            value=Signal::derive(move || filter.with(|f| f.search.clone()))
                            on_change=Callback::new(move |v| filter.update(|f| f.search = v))
                            placeholder=placeholder
                        />
                    }
                }}
                {body}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_label_groups_thousands() {
        assert_eq!(revenue_label(1_234_567), "$1,234,567");
        assert_eq!(revenue_label(900), "$900");
    }
}
