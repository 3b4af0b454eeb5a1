use super::aggregate::BankAccount;

const HOLDER: &str = "Muhammad Mukarram Ali";

pub fn mock_bank_accounts() -> Vec<BankAccount> {
    vec![
        BankAccount {
            id: "bd001".into(),
            bank_name: "Meezan Bank LTD.".into(),
            account_holder_name: HOLDER.into(),
            account_number_last4: "XXXX-3832".into(),
            currency: "PKR".into(),
            is_primary: true,
        },
        BankAccount {
            id: "bd002".into(),
            bank_name: "Easy Paisa Digital Bank".into(),
            account_holder_name: HOLDER.into(),
            account_number_last4: "XXXX-9669".into(),
            currency: "PKR".into(),
            is_primary: false,
        },
    ]
}
