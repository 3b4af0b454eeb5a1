//! Client-side form validation.
//!
//! Rules report the message shown under the offending field. A form collects
//! them into [`FieldErrors`], keeping only the first failure per field.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Required(&'static str),
    #[error("{0}")]
    TooShort(&'static str),
    #[error("{0}")]
    InvalidEmail(&'static str),
    #[error("{0}")]
    Mismatch(&'static str),
}

/// Field name -> first validation failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule; later failures on the same field are ignored
    pub fn check(&mut self, field: &'static str, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.0.entry(field).or_insert(err);
        }
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    /// Inline message for a field
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Forms validated before their (simulated) submission
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(message))
    } else {
        Ok(())
    }
}

/// At least `min` characters (not bytes)
pub fn min_len(value: &str, min: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::TooShort(message))
    } else {
        Ok(())
    }
}

pub fn email(value: &str, message: &'static str) -> Result<(), ValidationError> {
    let local_ok = !value.starts_with('.') && !value.contains("..");
    if local_ok && EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(message))
    }
}

pub fn matches(value: &str, other: &str, message: &'static str) -> Result<(), ValidationError> {
    if value == other {
        Ok(())
    } else {
        Err(ValidationError::Mismatch(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("x", "needed").is_ok());
        assert_eq!(required("", "needed"), Err(ValidationError::Required("needed")));
    }

    #[test]
    fn test_min_len_counts_chars() {
        assert!(min_len("abc", 3, "short").is_ok());
        assert!(min_len("ab", 3, "short").is_err());
        assert!(min_len("äöü", 3, "short").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(email("john.doe@example.com", "bad").is_ok());
        assert!(email("a+tag@sub.domain.io", "bad").is_ok());
        assert!(email("no-at-sign", "bad").is_err());
        assert!(email("x@y", "bad").is_err());
        assert!(email(".lead@example.com", "bad").is_err());
        assert!(email("dou..ble@example.com", "bad").is_err());
        assert!(email("", "bad").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_failure() {
        let mut errors = FieldErrors::new();
        errors.check("username", required("", "Username is required"));
        errors.check("username", min_len("", 3, "Too short"));
        errors.check("email", email("ok@example.com", "bad"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("username").as_deref(), Some("Username is required"));
        assert_eq!(errors.message("email"), None);
        assert!(errors.into_result().is_err());
    }
}
