use serde::{Deserialize, Serialize};

use crate::shared::config::ProfileDefaults;
use crate::shared::notification::Notification;
use crate::shared::validation::{email, matches, min_len, required, FieldErrors, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub username: String,
}

impl From<&ProfileDefaults> for ProfileForm {
    fn from(d: &ProfileDefaults) -> Self {
        Self {
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            email: d.email.clone(),
            phone_number: d.phone_number.clone(),
            username: d.username.clone(),
        }
    }
}

impl Validate for ProfileForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("firstName", required(&self.first_name, "First name is required"));
        errors.check("lastName", required(&self.last_name, "Last name is required"));
        errors.check("email", email(&self.email, "Invalid email address"));
        errors.check(
            "phoneNumber",
            required(&self.phone_number, "Phone number is required"),
        );
        errors.check(
            "username",
            min_len(&self.username, 3, "Username must be at least 3 characters"),
        );
        errors.into_result()
    }
}

impl ProfileForm {
    pub fn submitted() -> Notification {
        Notification::new("Profile Updated (UI Only)")
            .with_description("Your profile changes have been logged.")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl Validate for PasswordChangeForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "currentPassword",
            required(&self.current_password, "Current password is required"),
        );
        errors.check(
            "newPassword",
            min_len(&self.new_password, 6, "New password must be at least 6 characters"),
        );
        errors.check(
            "confirmNewPassword",
            matches(
                &self.confirm_new_password,
                &self.new_password,
                "New passwords don't match",
            ),
        );
        errors.into_result()
    }
}

impl PasswordChangeForm {
    pub fn submitted() -> Notification {
        Notification::new("Password Changed (UI Only)")
            .with_description("Your password change has been logged.")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationChannel {
    MarketingEmails,
    ProductUpdates,
    Payouts,
}

impl NotificationChannel {
    pub fn all() -> [NotificationChannel; 3] {
        [
            NotificationChannel::MarketingEmails,
            NotificationChannel::ProductUpdates,
            NotificationChannel::Payouts,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::MarketingEmails => "Marketing Emails",
            NotificationChannel::ProductUpdates => "Product Updates",
            NotificationChannel::Payouts => "Payout Notifications",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            NotificationChannel::MarketingEmails => "Receive updates on new products and promotions.",
            NotificationChannel::ProductUpdates => {
                "Get notified about changes to products you promote."
            }
            NotificationChannel::Payouts => "Receive alerts when payouts are processed.",
        }
    }
}

/// Settings page notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub marketing_emails: bool,
    pub product_updates: bool,
    pub payouts: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            marketing_emails: true,
            product_updates: false,
            payouts: true,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::MarketingEmails => self.marketing_emails,
            NotificationChannel::ProductUpdates => self.product_updates,
            NotificationChannel::Payouts => self.payouts,
        }
    }

    pub fn toggle(&mut self, channel: NotificationChannel) -> Notification {
        let flag = match channel {
            NotificationChannel::MarketingEmails => &mut self.marketing_emails,
            NotificationChannel::ProductUpdates => &mut self.product_updates,
            NotificationChannel::Payouts => &mut self.payouts,
        };
        *flag = !*flag;
        Notification::new("Notification Settings Updated (UI Only)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn test_profile_prefilled_from_config_is_valid() {
        let config = AppConfig::load().unwrap();
        let form = ProfileForm::from(&config.profile);
        assert_eq!(form.first_name, "Johnathan");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_profile_rejects_bad_email() {
        let config = AppConfig::load().unwrap();
        let mut form = ProfileForm::from(&config.profile);
        form.email = "john.doe".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message("email").as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn test_password_change_rules() {
        let form = PasswordChangeForm {
            current_password: "old".into(),
            new_password: "newpass".into(),
            confirm_new_password: "newpazz".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message("confirmNewPassword").as_deref(),
            Some("New passwords don't match")
        );

        let errors = PasswordChangeForm::default().validate().unwrap_err();
        assert!(errors.get("currentPassword").is_some());
        assert!(errors.get("newPassword").is_some());
        // both empty, so they match
        assert!(errors.get("confirmNewPassword").is_none());
    }

    #[test]
    fn test_toggle_flips_only_one_channel() {
        let mut prefs = NotificationPreferences::default();
        let n = prefs.toggle(NotificationChannel::ProductUpdates);
        assert_eq!(n.title, "Notification Settings Updated (UI Only)");
        assert!(prefs.get(NotificationChannel::ProductUpdates));
        assert!(prefs.get(NotificationChannel::MarketingEmails));
        assert!(prefs.get(NotificationChannel::Payouts));
        prefs.toggle(NotificationChannel::Payouts);
        assert!(!prefs.payouts);
    }
}
