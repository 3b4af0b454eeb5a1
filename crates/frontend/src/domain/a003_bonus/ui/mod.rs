pub mod list;

pub use list::BonusList;
