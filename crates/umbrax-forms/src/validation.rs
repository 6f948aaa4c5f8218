//! Field validators.
//!
//! Every validator looks at the trimmed value, so surrounding whitespace
//! never makes a field valid on its own.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }

    /// Returns the configured minimum.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_PATTERN.is_match(value.trim()) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn test_min_length_validator_trims() {
        let v = MinLengthValidator::new(5);
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("hello world").is_ok());
        assert!(v.validate("hi").is_err());
        assert!(v.validate("  hi   ").is_err());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let v = MinLengthValidator::new(2);
        assert!(v.validate("é").is_err());
        assert!(v.validate("éé").is_ok());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate("a@b.co").is_ok());
        assert!(v.validate("user.name@domain.co.uk").is_ok());
        assert!(v.validate("  jo@x.co ").is_ok());
        assert!(v.validate("a@b").is_err());
        assert!(v.validate("a b@c.co").is_err());
        assert!(v.validate("a@@b.co").is_err());
        assert!(v.validate("@example.com").is_err());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn test_custom_message_is_returned() {
        let v = RequiredValidator::with_message("Pick one");
        assert_eq!(v.validate(""), Err("Pick one".to_string()));
        assert_eq!(v.message(), "Pick one");
    }
}
