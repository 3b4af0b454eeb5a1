use serde::{Deserialize, Serialize};

use crate::shared::notification::Notification;
use crate::shared::validation::{email, matches, min_len, required, FieldErrors, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInForm {
    pub email_or_username: String,
    pub password: String,
}

impl Validate for SignInForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "emailOrUsername",
            required(&self.email_or_username, "Email or Username is required"),
        );
        errors.check("password", required(&self.password, "Password is required"));
        errors.into_result()
    }
}

impl SignInForm {
    pub fn submitted() -> Notification {
        Notification::new("Sign In Attempted (UI Only)")
            .with_description("Form data logged to console. Redirecting to dashboard...")
    }

    pub fn google_clicked() -> Notification {
        Notification::new("Google Sign-In Clicked (UI Only)")
            .with_description("This is a placeholder for Google Sign-In.")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validate for SignUpForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("firstName", required(&self.first_name, "First name is required"));
        errors.check("lastName", required(&self.last_name, "Last name is required"));
        errors.check("email", email(&self.email, "Invalid email address"));
        errors.check(
            "phoneNumber",
            required(&self.phone_number, "Phone number is required"),
        );
        errors.check("country", required(&self.country, "Country is required"));
        errors.check("city", required(&self.city, "City is required"));
        errors.check(
            "username",
            min_len(&self.username, 3, "Username must be at least 3 characters"),
        );
        errors.check(
            "password",
            min_len(&self.password, 6, "Password must be at least 6 characters"),
        );
        errors.check(
            "confirmPassword",
            matches(&self.confirm_password, &self.password, "Passwords don't match"),
        );
        errors.into_result()
    }
}

impl SignUpForm {
    /// Changing the country invalidates the selected city
    pub fn set_country(&mut self, country: String) {
        if self.country != country {
            self.city.clear();
        }
        self.country = country;
    }

    pub fn submitted() -> Notification {
        Notification::new("Signup Attempted (UI Only)").with_description("Form data logged to console.")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Validate for ForgotPasswordForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", email(&self.email, "Invalid email address"));
        errors.into_result()
    }
}

impl ForgotPasswordForm {
    pub fn submitted(&self) -> Notification {
        Notification::new("Password Reset Requested (UI Only)").with_description(format!(
            "If an account exists for {}, a reset link will be sent.",
            self.email
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignUpForm {
        SignUpForm {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            email: "jane@example.com".into(),
            phone_number: "555-0000".into(),
            country: "canada".into(),
            city: "toronto".into(),
            username: "jroe".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn test_signin_requires_both_fields() {
        let errors = SignInForm::default().validate().unwrap_err();
        assert_eq!(
            errors.message("emailOrUsername").as_deref(),
            Some("Email or Username is required")
        );
        assert_eq!(errors.message("password").as_deref(), Some("Password is required"));

        let ok = SignInForm {
            email_or_username: "jane".into(),
            password: "x".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_signup_valid() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn test_signup_password_mismatch() {
        let mut form = valid_signup();
        form.confirm_password = "secret2".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("confirmPassword").as_deref(),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn test_signup_short_fields() {
        let mut form = valid_signup();
        form.username = "jr".into();
        form.password = "12345".into();
        form.confirm_password = "12345".into();
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["password", "username"]);
    }

    #[test]
    fn test_country_change_resets_city() {
        let mut form = valid_signup();
        form.set_country("canada".into());
        assert_eq!(form.city, "toronto");
        form.set_country("uk".into());
        assert!(form.city.is_empty());
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_forgot_password_mentions_email() {
        let form = ForgotPasswordForm {
            email: "jane@example.com".into(),
        };
        assert!(form.validate().is_ok());
        let n = form.submitted();
        assert!(n.description.unwrap().contains("jane@example.com"));

        let bad = ForgotPasswordForm { email: "nope".into() };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_signup_serializes_camel_case() {
        let json = serde_json::to_value(valid_signup()).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["confirmPassword"], "secret1");
    }
}
