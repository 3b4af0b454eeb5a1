use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use contracts::domain::a005_bank_account::form::{NewBankDetailsForm, BANK_COUNTRIES, CURRENCIES};
use contracts::shared::location::to_options;
use leptos::prelude::*;

/// Payout account form. A valid submit is only logged.
#[component]
#[allow(non_snake_case)]
pub fn NewBankDetails() -> impl IntoView {
    let toast = use_toast();
    let vm = FormViewModel::new(NewBankDetailsForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.submit("new bank details").is_some() {
            toast.notify(NewBankDetailsForm::submitted());
        }
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Add New Bank Details" />

            <div class="card">
                <div class="card__header">
                    <span class="card__icon">{icon("landmark")}</span>
                    <div>
                        <h3 class="card__title">"Payout Information"</h3>
                        <p class="card__subtitle">
                            "Provide your bank account details for receiving payouts. Ensure all information is accurate."
                        </p>
                    </div>
                </div>

                <form class="form" on:submit=on_submit>
                    <Input
                        id="accountHolderName"
                        label="Account Holder Name"
                        value=vm.field(|f| &f.account_holder_name)
                        on_input=vm.setter(|f, v| f.account_holder_name = v)
                        error=vm.error("accountHolderName")
                    />
                    <Input
                        id="bankName"
                        label="Bank Name"
                        value=vm.field(|f| &f.bank_name)
                        on_input=vm.setter(|f, v| f.bank_name = v)
                        error=vm.error("bankName")
                    />
                    <div class="form__row">
                        <Input
                            id="accountNumber"
                            label="Account Number"
                            value=vm.field(|f| &f.account_number)
                            on_input=vm.setter(|f, v| f.account_number = v)
                            error=vm.error("accountNumber")
                        />
                        <Input
                            id="routingNumber"
                            label="Routing Number (e.g., ABA for US)"
                            value=vm.field(|f| &f.routing_number)
                            on_input=vm.setter(|f, v| f.routing_number = v)
                        />
                    </div>
                    <div class="form__row">
                        <Input
                            id="iban"
                            label="IBAN (International Bank Account Number)"
                            value=vm.field(|f| &f.iban)
                            on_input=vm.setter(|f, v| f.iban = v)
                        />
                        <Input
                            id="swiftBic"
                            label="SWIFT/BIC Code"
                            value=vm.field(|f| &f.swift_bic)
                            on_input=vm.setter(|f, v| f.swift_bic = v)
                        />
                    </div>
                    <Textarea
                        id="bankAddress"
                        label="Bank Address (Optional)"
                        value=vm.field(|f| &f.bank_address)
                        on_input=vm.setter(|f, v| f.bank_address = v)
                    />
                    <div class="form__row">
                        <Select
                            id="country"
                            label="Bank Country"
                            placeholder="Select bank country"
                            value=vm.field(|f| &f.country)
                            on_change=vm.setter(|f, v| f.country = v)
                            options=Signal::stored(to_options(BANK_COUNTRIES))
                            error=vm.error("country")
                        />
                        <Select
                            id="currency"
                            label="Preferred Currency"
                            placeholder="Select currency"
                            value=vm.field(|f| &f.currency)
                            on_change=vm.setter(|f, v| f.currency = v)
                            options=Signal::stored(to_options(CURRENCIES))
                            error=vm.error("currency")
                        />
                    </div>
                    <Textarea
                        id="additionalNotes"
                        label="Additional Notes (Optional)"
                        placeholder="Any specific instructions for your bank or payout."
                        value=vm.field(|f| &f.additional_notes)
                        on_input=vm.setter(|f, v| f.additional_notes = v)
                    />
                    <div class="form__actions">
                        <Button button_type="submit">"Save Bank Details"</Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
