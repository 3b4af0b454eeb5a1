use serde::{Deserialize, Serialize};

use crate::domain::common::{remove_by_id, AggregateRoot, ListView};
use crate::shared::notification::Notification;

/// Payout destination of the affiliate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    pub account_holder_name: String,
    /// Masked number, e.g. "XXXX-3832"
    pub account_number_last4: String,
    pub currency: String,
    pub is_primary: bool,
}

impl AggregateRoot for BankAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "bank_account"
    }

    fn element_name() -> &'static str {
        "Bank Account"
    }

    fn list_name() -> &'static str {
        "My Bank Details"
    }

    fn empty_message() -> &'static str {
        "No Bank Details Found"
    }
}

pub fn accounts_view(accounts: &[BankAccount]) -> ListView<BankAccount> {
    ListView::for_aggregate(accounts.to_vec())
}

/// Single-winner rule: every account's flag becomes `id == target`.
///
/// An unknown `target` clears the flag on every account.
pub fn set_primary(accounts: &mut [BankAccount], target: &str) -> Notification {
    for account in accounts.iter_mut() {
        account.is_primary = account.id == target;
    }
    Notification::new("Primary Account Updated (UI Only)")
        .with_description(format!("Account ID: {} is now set as primary.", target))
}

pub fn delete_account(accounts: &mut Vec<BankAccount>, id: &str) -> Notification {
    if remove_by_id(accounts, id).is_none() {
        log::warn!("bank account {} not found", id);
    }
    Notification::new("Bank Details Deleted (UI Only)")
        .with_description(format!("Account ID: {} has been removed from the list.", id))
}

/// Editing is not implemented
pub fn edit_account(id: &str) -> Notification {
    Notification::new("Edit Bank Details (UI Only)")
        .with_description(format!("Editing details for account ID: {}. (Not implemented)", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_bank_account::seed::mock_bank_accounts;

    fn primaries(accounts: &[BankAccount]) -> Vec<&str> {
        accounts
            .iter()
            .filter(|a| a.is_primary)
            .map(|a| a.id.as_str())
            .collect()
    }

    #[test]
    fn test_set_primary_single_winner() {
        let mut accounts = mock_bank_accounts();
        assert_eq!(primaries(&accounts), vec!["bd001"]);
        let n = set_primary(&mut accounts, "bd002");
        assert_eq!(primaries(&accounts), vec!["bd002"]);
        assert_eq!(
            n.description.as_deref(),
            Some("Account ID: bd002 is now set as primary.")
        );
        // idempotent
        set_primary(&mut accounts, "bd002");
        assert_eq!(primaries(&accounts), vec!["bd002"]);
    }

    #[test]
    fn test_set_primary_unknown_clears_all() {
        let mut accounts = mock_bank_accounts();
        set_primary(&mut accounts, "bd404");
        assert!(primaries(&accounts).is_empty());
    }

    #[test]
    fn test_delete_until_empty() {
        let mut accounts = mock_bank_accounts();
        delete_account(&mut accounts, "bd001");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "bd002");
        let n = delete_account(&mut accounts, "bd002");
        assert_eq!(n.title, "Bank Details Deleted (UI Only)");
        assert_eq!(
            accounts_view(&accounts).empty_message(),
            Some("No Bank Details Found")
        );
    }

    #[test]
    fn test_edit_only_notifies() {
        let n = edit_account("bd001");
        assert!(n.description.unwrap().ends_with("(Not implemented)"));
    }
}
