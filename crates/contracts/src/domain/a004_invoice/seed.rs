use super::aggregate::{Invoice, InvoiceStatus};

fn invoice(id: &str, date: &str, amount: f64, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.into(),
        date: date.into(),
        amount,
        status,
    }
}

pub fn mock_invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    vec![
        invoice("INV-2024-001", "2024-07-15", 1250.75, Paid),
        invoice("INV-2024-002", "2024-07-28", 875.00, Pending),
        invoice("INV-2024-003", "2024-06-30", 2100.50, Paid),
        invoice("INV-2024-004", "2024-06-15", 550.20, Paid),
        invoice("INV-2024-005", "2024-05-31", 1500.00, Overdue),
    ]
}
