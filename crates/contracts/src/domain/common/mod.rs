//! Common types and traits for all page datasets

pub mod aggregate_root;
pub mod list_filter;

// Re-exports
pub use aggregate_root::{remove_by_id, update_by_id, AggregateRoot};
pub use list_filter::{
    distinct_categories, is_all_selector, text_matches, Categorized, FilterChain, ListView,
    Searchable,
};
