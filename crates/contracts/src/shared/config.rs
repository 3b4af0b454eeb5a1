use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub affiliate: AffiliateConfig,
    pub chat: ChatConfig,
    pub notifications: NotificationConfig,
    pub profile: ProfileDefaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AffiliateConfig {
    /// Handle embedded in the referral link
    pub id: String,
    /// Referral link prefix, without a trailing slash
    pub link_base: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    pub reply_delay_ms: u32,
    pub bot_reply: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
    /// Maximum toasts on screen; older ones are dropped first
    pub max_visible: usize,
}

/// Prefilled values of the settings profile form
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProfileDefaults {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[app]
name = "ProMillion"

[affiliate]
id = "mukarramali_9669"
link_base = "https://promillion.marketing/ref"

[chat]
reply_delay_ms = 1000
bot_reply = "Thanks for your message! This is a simulated response. How can I help you further?"

[notifications]
dismiss_after_ms = 5000
max_visible = 3

[profile]
first_name = "Johnathan"
last_name = "Doe"
email = "john.doe@example.com"
phone_number = "555-0101"
username = "john_doe_123"
"#;

impl AppConfig {
    /// Parse and sanity-check a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    /// Load the embedded default configuration
    pub fn load() -> Result<Self, ConfigError> {
        log::debug!("Using default embedded configuration");
        Self::from_toml(DEFAULT_CONFIG)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.affiliate.id.trim().is_empty() {
            return Err(ConfigError::Invalid("affiliate.id must not be empty".into()));
        }
        if self.affiliate.link_base.ends_with('/') {
            return Err(ConfigError::Invalid(
                "affiliate.link_base must not end with '/'".into(),
            ));
        }
        if self.notifications.max_visible == 0 {
            return Err(ConfigError::Invalid(
                "notifications.max_visible must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Referral link without campaign: `{link_base}/{id}`
    pub fn base_affiliate_url(&self) -> String {
        format!("{}/{}", self.affiliate.link_base, self.affiliate.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.affiliate.id, "mukarramali_9669");
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.notifications.max_visible, 3);
        assert_eq!(config.profile.username, "john_doe_123");
        assert_eq!(
            config.base_affiliate_url(),
            "https://promillion.marketing/ref/mukarramali_9669"
        );
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let bad = DEFAULT_CONFIG.replace(
            "link_base = \"https://promillion.marketing/ref\"",
            "link_base = \"https://promillion.marketing/ref/\"",
        );
        assert!(matches!(
            AppConfig::from_toml(&bad),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = AppConfig::from_toml("[app]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
