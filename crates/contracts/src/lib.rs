//! Shared domain model for the affiliate portal.
//!
//! Everything here is plain Rust with no browser dependencies: the record
//! types and mock datasets behind every page, the list-filter pipeline,
//! the local mutation rules, form validation, and the small state machines
//! (chat panel, sidebar tree) the frontend drives through signals.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
