pub mod aggregate;
pub mod seed;
