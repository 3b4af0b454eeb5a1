use crate::layout::toast_service::use_toast;
use crate::shared::clipboard::copy_link;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::button::button_class;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::list_utils::EmptyState;
use contracts::domain::a002_product::aggregate::{remove_from_my_products, MY_PRODUCTS_EMPTY};
use contracts::domain::a002_product::seed::mock_my_products;
use contracts::domain::common::ListView;
use contracts::shared::format::format_price;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MyProducts() -> impl IntoView {
    let toast = use_toast();
    let products = RwSignal::new(mock_my_products());

    let view_list = Memo::new(move |_| ListView::from_rows(products.get(), MY_PRODUCTS_EMPTY));

    let remove = move |id: String| {
        let mut notification = None;
        products.update(|mine| notification = remove_from_my_products(mine, &id));
        match notification {
            Some(n) => toast.notify(n),
            None => log::warn!("product {} is not in My Products", id),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="My Products">
                <a class=button_class(None, None) href="/products/all">"Discover More Products"</a>
            </PageHeader>

            {move || match view_list.get() {
                ListView::Empty(msg) => view! {
                    <div class="card">
                        <EmptyState
                            message=msg
                            hint="You haven't added any products to promote yet."
                            icon_name="shopping-bag"
                        />
                        <div class="card__footer card__footer--center">
                            <a class=button_class(None, None) href="/products/all">"Browse Products"</a>
                        </div>
                    </div>
                }
                .into_any(),
                ListView::Rows(rows) => view! {
                    <div class="card-grid card-grid--3">
                        {rows
                            .into_iter()
                            .map(|product| {
                                let id = product.id.clone();
                                let link = product.unique_link.clone().unwrap_or_default();
                                let link_for_copy = link.clone();
                                view! {
                                    <div class="card card--media product-card">
                                        <img class="card__image" src=product.image_url alt=product.name.clone() />
                                        <h3 class="card__title">{product.name}</h3>
                                        <p class="card__subtitle">{product.category}</p>
                                        <p class="product-card__price">{format_price(product.price)}</p>
                                        <p class="product-card__commission">"Commission: " {product.commission}</p>
                                        <div class="inline-field">
                                            <input class="form__input form__input--small" type="text" readonly=true prop:value=link />
                                            <Button
                                                variant="outline"
                                                size="icon"
                                                on_click=Callback::new(move |_| copy_link(
                                                    toast,
                                                    &link_for_copy,
                                                    "Your unique affiliate link has been copied to the clipboard.",
                                                ))
                                            >
                                                {icon("link")}
                                            </Button>
                                        </div>
                                        <div class="card__footer">
                                            <Button
                                                variant="destructive"
                                                size="sm"
                                                on_click=Callback::new(move |_| remove(id.clone()))
                                            >
                                                {icon("trash")}
                                                "Remove"
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
    }
}
