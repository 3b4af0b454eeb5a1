use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;
use crate::shared::list_utils::{EmptyState, SearchInput};
use contracts::domain::a002_product::aggregate::{added_to_my_products, Product, ProductFilter};
use contracts::domain::a002_product::seed::mock_catalog;
use contracts::domain::common::ListView;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Browsable catalog; `?category=` preselects the category filter
#[component]
#[allow(non_snake_case)]
pub fn ProductCatalog() -> impl IntoView {
    let toast = use_toast();
    let query = use_query_map();

    let catalog = StoredValue::new(mock_catalog());
    let categories = catalog.with_value(|c| ProductFilter::categories(c));
    let category_options: Vec<(String, String)> =
        categories.iter().map(|c| (c.clone(), c.clone())).collect();

    let initial = query.with_untracked(|q| ProductFilter::from_query(&categories, q.get("category").as_deref()));
    let filter = RwSignal::new(initial);

    let view_list = Memo::new(move |_| {
        let f = filter.get();
        catalog.with_value(|all| f.apply(all))
    });

    let add = move |product: Product| {
        log::info!("{} added to My Products", product.id);
        toast.notify(added_to_my_products(&product));
    };

    view! {
        <div class="page">
            <PageHeader title="All Products" />

            <div class="card">
                <div class="card__header">
                    <span class="card__icon">{icon("package")}</span>
                    <div>
                        <h3 class="card__title">"Product Catalog"</h3>
                        <p class="card__subtitle">"Browse all available products for promotion."</p>
                    </div>
                </div>

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.search = v))
                        placeholder="Search products..."
                    />
                    <Select
                        value=Signal::derive(move || filter.with(|f| f.category.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.category = v))
                        options=Signal::stored(category_options)
                        class="filter-bar__select"
                    />
                </div>

                {move || match view_list.get() {
                    ListView::Empty(msg) => view! { <EmptyState message=msg /> }.into_any(),
                    ListView::Rows(rows) => view! {
                        <div class="card-grid card-grid--3">
                            {rows
                                .into_iter()
                                .map(|product| {
                                    let for_add = product.clone();
                                    view! {
                                        <div class="card card--media product-card">
                                            <img class="card__image" src=product.image_url.clone() alt=product.name.clone() />
                                            <h3 class="card__title">{product.name.clone()}</h3>
                                            <p class="card__subtitle">{product.category.clone()}</p>
                                            <p class="product-card__price">{format_price(product.price)}</p>
                                            <p class="product-card__commission">
                                                "Commission: " {product.commission.clone()}
                                            </p>
                                            <div class="card__footer">
                                                <Button
                                                    size="sm"
                                                    on_click=Callback::new(move |_| add(for_add.clone()))
                                                >
                                                    {icon("plus")}
                                                    "Add to My Products"
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
