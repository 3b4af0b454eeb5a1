pub mod affiliate_link;
pub mod chat;
pub mod config;
pub mod format;
pub mod location;
pub mod navigation;
pub mod notification;
pub mod validation;
