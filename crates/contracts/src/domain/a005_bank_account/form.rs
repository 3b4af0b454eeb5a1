//! New bank details form

use serde::{Deserialize, Serialize};

use crate::shared::location::SelectOption;
use crate::shared::notification::Notification;
use crate::shared::validation::{required, FieldErrors, Validate};

pub const BANK_COUNTRIES: &[SelectOption] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("AU", "Australia"),
];

pub const CURRENCIES: &[SelectOption] = &[
    ("USD", "USD - US Dollar"),
    ("CAD", "CAD - Canadian Dollar"),
    ("GBP", "GBP - British Pound"),
    ("EUR", "EUR - Euro"),
    ("AUD", "AUD - Australian Dollar"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBankDetailsForm {
    pub account_holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub iban: String,
    pub swift_bic: String,
    pub bank_address: String,
    pub country: String,
    pub currency: String,
    pub additional_notes: String,
}

impl Validate for NewBankDetailsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "accountHolderName",
            required(&self.account_holder_name, "Account holder name is required"),
        );
        errors.check("bankName", required(&self.bank_name, "Bank name is required"));
        errors.check(
            "accountNumber",
            required(&self.account_number, "Account number is required"),
        );
        errors.check("country", required(&self.country, "Bank country is required"));
        errors.check(
            "currency",
            required(&self.currency, "Preferred currency is required"),
        );
        errors.into_result()
    }
}

impl NewBankDetailsForm {
    pub fn submitted() -> Notification {
        Notification::new("Bank Details Submitted (UI Only)")
            .with_description("Your bank details have been logged to the console.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = NewBankDetailsForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.message("currency").as_deref(),
            Some("Preferred currency is required")
        );
        assert!(errors.get("iban").is_none());
    }

    #[test]
    fn test_optional_fields_may_stay_blank() {
        let form = NewBankDetailsForm {
            account_holder_name: "Jane Roe".into(),
            bank_name: "First Bank".into(),
            account_number: "12345678".into(),
            country: BANK_COUNTRIES[2].0.into(),
            currency: CURRENCIES[2].0.into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }
}
