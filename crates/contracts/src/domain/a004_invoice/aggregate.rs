use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, ListView};
use crate::shared::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "success",
            InvoiceStatus::Pending => "warning",
            InvoiceStatus::Overdue => "error",
        }
    }
}

/// Payout invoice, read-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Download is simulated; only the notification is produced
    pub fn download(&self) -> Notification {
        log::info!("download requested for invoice {}", self.id);
        Notification::new("Download Requested (UI Only)")
            .with_description(format!("Downloading invoice {}... (simulated)", self.id))
    }
}

impl AggregateRoot for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }

    fn empty_message() -> &'static str {
        "No invoices found."
    }
}

pub fn invoice_view(invoices: &[Invoice]) -> ListView<Invoice> {
    ListView::for_aggregate(invoices.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_invoice::seed::mock_invoices;

    #[test]
    fn test_download_notification() {
        let invoices = mock_invoices();
        let n = invoices[1].download();
        assert_eq!(n.title, "Download Requested (UI Only)");
        assert_eq!(
            n.description.as_deref(),
            Some("Downloading invoice INV-2024-002... (simulated)")
        );
    }

    #[test]
    fn test_view_states() {
        assert_eq!(invoice_view(&mock_invoices()).rows().len(), 5);
        assert_eq!(invoice_view(&[]).empty_message(), Some("No invoices found."));
    }

    #[test]
    fn test_status_badges() {
        let variants: Vec<_> = mock_invoices()
            .iter()
            .map(|i| i.status.badge_variant())
            .collect();
        assert_eq!(variants, vec!["success", "warning", "success", "success", "error"]);
    }
}
