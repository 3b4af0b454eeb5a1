use contracts::shared::chat::ChatState;
use leptos::prelude::*;

/// Application-wide UI state shared by the shell components
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar expanded (labels visible) or collapsed to icons
    pub left_open: RwSignal<bool>,
    /// Chatbot panel and its message log
    pub chat: RwSignal<ChatState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            chat: RwSignal::new(ChatState::new()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
