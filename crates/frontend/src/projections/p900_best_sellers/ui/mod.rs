pub mod list;

pub use list::BestSellers;
