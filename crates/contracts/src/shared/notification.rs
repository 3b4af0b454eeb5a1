use serde::{Deserialize, Serialize};

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        }
    }
}

/// Transient, fire-and-forget message produced by every simulated action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NotificationVariant::Default,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = NotificationVariant::Destructive;
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    /// Clipboard write succeeded
    pub fn link_copied(description: &str) -> Self {
        Self::new("Link Copied!").with_description(description)
    }

    /// Clipboard write failed; non-fatal
    pub fn copy_failed() -> Self {
        Self::new("Failed to Copy")
            .with_description("Could not copy the link. Please try again.")
            .destructive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let n = Notification::new("Saved").with_description("All good");
        assert_eq!(n.title, "Saved");
        assert_eq!(n.description.as_deref(), Some("All good"));
        assert!(!n.is_destructive());
        assert_eq!(n.variant.as_str(), "default");
    }

    #[test]
    fn test_copy_failed_is_destructive() {
        let n = Notification::copy_failed();
        assert!(n.is_destructive());
        assert_eq!(n.title, "Failed to Copy");
    }
}
