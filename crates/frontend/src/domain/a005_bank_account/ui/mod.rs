pub mod form;
pub mod list;

pub use form::NewBankDetails;
pub use list::BankDetailsList;
