pub mod catalog;
pub mod my_products;

pub use catalog::ProductCatalog;
pub use my_products::MyProducts;
