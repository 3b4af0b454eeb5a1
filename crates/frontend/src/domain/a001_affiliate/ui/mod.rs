pub mod list;
pub mod my_link;

pub use list::AffiliateList;
pub use my_link::MyLinkPage;
