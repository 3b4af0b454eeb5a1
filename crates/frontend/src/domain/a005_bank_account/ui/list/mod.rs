use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::button::button_class;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::list_utils::EmptyState;
use contracts::domain::a005_bank_account::aggregate::{
    accounts_view, delete_account, edit_account, set_primary,
};
use contracts::domain::a005_bank_account::seed::mock_bank_accounts;
use contracts::domain::common::ListView;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BankDetailsList() -> impl IntoView {
    let toast = use_toast();
    let accounts = RwSignal::new(mock_bank_accounts());

    let view_list = Memo::new(move |_| accounts.with(|a| accounts_view(a)));

    let make_primary = move |id: String| {
        let mut notification = None;
        accounts.update(|all| notification = Some(set_primary(all, &id)));
        if let Some(n) = notification {
            toast.notify(n);
        }
    };

    let delete = move |id: String| {
        let mut notification = None;
        accounts.update(|all| notification = Some(delete_account(all, &id)));
        if let Some(n) = notification {
            toast.notify(n);
        }
    };

    view! {
        <div class="page">
            <PageHeader title="My Bank Details">
                <a class=button_class(None, None) href="/bank/new">
                    {icon("plus")}
                    "Add New Account"
                </a>
            </PageHeader>

            {move || match view_list.get() {
                ListView::Empty(msg) => view! {
                    <div class="card">
                        <EmptyState
                            message=msg
                            hint="You haven't added any bank accounts yet. Add one to receive payouts."
                            icon_name="landmark"
                        />
                        <div class="card__footer card__footer--center">
                            <a class=button_class(None, None) href="/bank/new">
                                {icon("plus")}
                                "Add Bank Account"
                            </a>
                        </div>
                    </div>
                }
                .into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|account| {
                        let id_edit = account.id.clone();
                        let id_delete = account.id.clone();
                        let id_primary = account.id.clone();
                        let is_primary = account.is_primary;
                        view! {
                            <div class="card bank-card" class:bank-card--primary=is_primary>
                                <div class="card__header card__header--between">
                                    <div>
                                        <h3 class="card__title">
                                            {icon("landmark")}
                                            {account.bank_name}
                                            <Show when=move || is_primary>
                                                <Badge variant="primary">"Primary"</Badge>
                                            </Show>
                                        </h3>
                                        <p class="card__subtitle">
                                            {format!(
                                                "Account ending in {} ({})",
                                                account.account_number_last4, account.currency
                                            )}
                                        </p>
                                    </div>
                                    <div class="card__actions">
                                        <Button
                                            variant="ghost"
                                            size="icon"
                                            on_click=Callback::new(move |_| toast.notify(edit_account(&id_edit)))
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            variant="ghost"
                                            size="icon"
                                            class="button--danger-text"
                                            on_click=Callback::new(move |_| delete(id_delete.clone()))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                </div>
                                <p><strong>"Account Holder: "</strong>{account.account_holder_name}</p>
                                <Show when=move || !is_primary>
                                    {
                                        let id = id_primary.clone();
                                        view! {
                                            <Button
                                                variant="outline"
                                                size="sm"
                                                on_click=Callback::new(move |_| make_primary(id.clone()))
                                            >
                                                "Set as Primary"
                                            </Button>
                                        }
                                    }
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
