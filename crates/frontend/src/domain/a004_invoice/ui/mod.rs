pub mod list;

pub use list::InvoiceList;
