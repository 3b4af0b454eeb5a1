pub mod clipboard;
pub mod components;
pub mod form_view_model;
pub mod icons;
pub mod list_utils;
pub mod theme;
