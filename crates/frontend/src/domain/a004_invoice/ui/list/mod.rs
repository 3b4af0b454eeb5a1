use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::list_utils::EmptyState;
use contracts::domain::a004_invoice::aggregate::{invoice_view, Invoice};
use contracts::domain::a004_invoice::seed::mock_invoices;
use contracts::domain::common::ListView;
use contracts::shared::format::format_money;
use leptos::prelude::*;

/// Read-only invoice history
#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let toast = use_toast();
    let invoices = mock_invoices();

    let body = match invoice_view(&invoices) {
        ListView::Empty(msg) => view! { <EmptyState message=msg /> }.into_any(),
        ListView::Rows(rows) => view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Invoice ID"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell table__header-cell--right">"Amount"</th>
                            <th class="table__header-cell table__header-cell--center">"Status"</th>
                            <th class="table__header-cell table__header-cell--right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|invoice: Invoice| {
                                let id = invoice.id.clone();
                                let date = invoice.date.clone();
                                let amount = format_money(invoice.amount);
                                let status = invoice.status;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--strong">{id}</td>
                                        <td class="table__cell">{date}</td>
                                        <td class="table__cell table__cell--right">{amount}</td>
                                        <td class="table__cell table__cell--center">
                                            <Badge variant=status.badge_variant()>{status.as_str()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--right">
                                            <Button
                                                variant="outline"
                                                size="sm"
                                                on_click=Callback::new(move |_| toast.notify(invoice.download()))
                                            >
                                                {icon("download")}
                                                "Download"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="page">
            <PageHeader title="My Invoices" />
            <div class="card">
                <div class="card__header">
                    <span class="card__icon">{icon("file-text")}</span>
                    <div>
                        <h3 class="card__title">"Invoice History"</h3>
                        <p class="card__subtitle">"Review your past and current invoices."</p>
                    </div>
                </div>
                {body}
            </div>
        </div>
    }
}
