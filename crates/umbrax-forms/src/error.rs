//! Error types for forms.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::contact::ContactField;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed with errors.
    #[error("validation errors: {0}")]
    ValidationErrors(ValidationErrors),

    /// A field name outside the contact form's field set.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Form data parsing error.
    #[error("failed to parse form data: {0}")]
    ParseError(String),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Error message keyed by field.
    pub errors: BTreeMap<ContactField, String>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records the error for a field, replacing an earlier one.
    pub fn add(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns all errors as a flat list in field order.
    pub fn all_errors(&self) -> Vec<(ContactField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_previous_message() {
        let mut errors = ValidationErrors::new();
        errors.add(ContactField::Name, "first");
        errors.add(ContactField::Name, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ContactField::Name), Some("second"));
    }

    #[test]
    fn test_display_lists_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ContactField::Message, "too short");
        errors.add(ContactField::Name, "missing");
        assert_eq!(errors.to_string(), "name: missing; message: too short");
    }
}
