//! The contact form: its closed field set, per-field rules, and the
//! submission type that can only be built from fully valid data.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FormError, Result, ValidationErrors};
use crate::validation::{EmailValidator, MinLengthValidator, RequiredValidator, Validator};

/// Error shown when the name is too short.
pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
/// Error shown for a malformed email address.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Error shown when no service is selected.
pub const SERVICE_MESSAGE: &str = "Please select a service";
/// Error shown when the message is too short.
pub const MESSAGE_MESSAGE: &str = "Message must be at least 10 characters";

/// One named input of the contact form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    /// All fields, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Service, Self::Message];

    /// The `name` attribute of the field's input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    /// The rule this field must satisfy.
    pub fn validator(self) -> Box<dyn Validator> {
        match self {
            Self::Name => Box::new(MinLengthValidator::with_message(2, NAME_MESSAGE)),
            Self::Email => Box::new(EmailValidator::with_message(EMAIL_MESSAGE)),
            Self::Service => Box::new(RequiredValidator::with_message(SERVICE_MESSAGE)),
            Self::Message => Box::new(MinLengthValidator::with_message(10, MESSAGE_MESSAGE)),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    /// Whether the value passed.
    pub valid: bool,
    /// The error message when it did not.
    pub message: Option<String>,
}

impl FieldResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing result carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Validates a single field value.
pub fn validate_field(field: ContactField, value: &str) -> FieldResult {
    let result = match field.validator().validate(value) {
        Ok(()) => FieldResult::valid(),
        Err(message) => FieldResult::invalid(message),
    };
    debug!(field = %field, valid = result.valid, "validated field");
    result
}

/// Validates a value for a field given by its input name.
pub fn validate_named(name: &str, value: &str) -> Result<FieldResult> {
    let field = name.parse::<ContactField>()?;
    Ok(validate_field(field, value))
}

/// Raw values of the contact form, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactData {
    values: BTreeMap<ContactField, String>,
}

impl ContactData {
    /// Creates empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value.
    #[must_use]
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field value in place.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Returns a field value; absent fields read as empty.
    pub fn get(&self, field: ContactField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Builds form data from submitted name/value pairs.
    ///
    /// Keys outside the contact field set are ignored.
    pub fn from_map(data: &HashMap<String, String>) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in data {
            match key.parse::<ContactField>() {
                Ok(field) => {
                    values.insert(field, value.clone());
                }
                Err(_) => debug!(key = %key, "ignoring unknown form key"),
            }
        }
        Self { values }
    }

    /// Parses form data from a JSON object of field names to values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FormError::ParseError(e.to_string()))
    }
}

/// Per-field results of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    results: BTreeMap<ContactField, FieldResult>,
}

impl FormValidation {
    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|r| r.valid)
    }

    /// The result for one field.
    pub fn result(&self, field: ContactField) -> &FieldResult {
        &self.results[&field]
    }

    /// All results in field order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &FieldResult)> {
        self.results.iter().map(|(field, result)| (*field, result))
    }

    /// Only the failing fields.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (ContactField, &FieldResult)> {
        self.iter().filter(|(_, result)| !result.valid)
    }

    /// Collects the failures as [`ValidationErrors`].
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, result) in self.invalid_fields() {
            errors.add(field, result.message.clone().unwrap_or_default());
        }
        errors
    }
}

/// Validates all four fields. Every field is evaluated even after a failure.
pub fn validate_form(data: &ContactData) -> FormValidation {
    let results = ContactField::ALL
        .into_iter()
        .map(|field| (field, validate_field(field, data.get(field))))
        .collect();
    FormValidation { results }
}

/// Form data that passed validation for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    name: String,
    email: String,
    service: String,
    message: String,
}

impl FormSubmission {
    /// Validates `data` and builds a submission from it.
    ///
    /// Returns the failing validation when any field is invalid, so no
    /// submission ever exists for data that did not pass.
    pub fn new(data: &ContactData) -> std::result::Result<Self, FormValidation> {
        let validation = validate_form(data);
        if !validation.is_valid() {
            return Err(validation);
        }
        Ok(Self {
            name: data.get(ContactField::Name).to_string(),
            email: data.get(ContactField::Email).to_string(),
            service: data.get(ContactField::Service).to_string(),
            message: data.get(ContactField::Message).to_string(),
        })
    }

    /// Returns a submitted value.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    /// Encodes the submission as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FormError::ParseError(e.to_string()))
    }
}

impl TryFrom<&ContactData> for FormSubmission {
    type Error = FormError;

    fn try_from(data: &ContactData) -> Result<Self> {
        Self::new(data).map_err(|validation| FormError::ValidationErrors(validation.errors()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> ContactData {
        ContactData::new()
            .with(ContactField::Name, "Jo")
            .with(ContactField::Email, "jo@x.co")
            .with(ContactField::Service, "consulting")
            .with(ContactField::Message, "0123456789")
    }

    #[test]
    fn test_name_boundary() {
        assert!(!validate_field(ContactField::Name, "a").valid);
        assert!(validate_field(ContactField::Name, "ab").valid);
        assert!(!validate_field(ContactField::Name, " a ").valid);
    }

    #[test]
    fn test_message_boundary() {
        assert!(!validate_field(ContactField::Message, "012345678").valid);
        assert!(validate_field(ContactField::Message, "0123456789").valid);
    }

    #[test]
    fn test_email_cases() {
        assert!(validate_field(ContactField::Email, "a@b.co").valid);
        assert!(!validate_field(ContactField::Email, "a@b").valid);
        assert!(!validate_field(ContactField::Email, "a b@c.co").valid);
        assert!(!validate_field(ContactField::Email, "").valid);
    }

    #[test]
    fn test_service_requires_selection() {
        assert!(!validate_field(ContactField::Service, "  ").valid);
        assert!(validate_field(ContactField::Service, "design").valid);
    }

    #[test]
    fn test_messages_match_fields() {
        assert_eq!(
            validate_field(ContactField::Name, ""),
            FieldResult::invalid(NAME_MESSAGE)
        );
        assert_eq!(
            validate_field(ContactField::Email, "nope"),
            FieldResult::invalid(EMAIL_MESSAGE)
        );
        assert_eq!(
            validate_field(ContactField::Service, ""),
            FieldResult::invalid(SERVICE_MESSAGE)
        );
        assert_eq!(
            validate_field(ContactField::Message, "short"),
            FieldResult::invalid(MESSAGE_MESSAGE)
        );
    }

    #[test]
    fn test_validate_named() {
        assert!(validate_named("name", "ab").unwrap().valid);
        assert!(matches!(
            validate_named("phone", "123"),
            Err(FormError::UnknownField(name)) if name == "phone"
        ));
    }

    #[test]
    fn test_validate_form_all_valid() {
        let validation = validate_form(&valid_data());
        assert!(validation.is_valid());
        assert!(validation.iter().all(|(_, r)| r.valid));
        assert_eq!(validation.iter().count(), 4);
    }

    #[test]
    fn test_validate_form_does_not_short_circuit() {
        let validation = validate_form(&ContactData::new());
        assert!(!validation.is_valid());
        assert_eq!(validation.invalid_fields().count(), 4);
        assert_eq!(validation.errors().len(), 4);
    }

    #[test]
    fn test_validate_form_single_failure() {
        let data = valid_data().with(ContactField::Email, "a@b");
        let validation = validate_form(&data);
        assert!(!validation.is_valid());
        let invalid: Vec<_> = validation.invalid_fields().map(|(f, _)| f).collect();
        assert_eq!(invalid, vec![ContactField::Email]);
    }

    #[test]
    fn test_from_map_ignores_unknown_keys() {
        let mut raw = HashMap::new();
        raw.insert("name".to_string(), "Jo".to_string());
        raw.insert("csrf".to_string(), "token".to_string());
        let data = ContactData::from_map(&raw);
        assert_eq!(data.get(ContactField::Name), "Jo");
        assert_eq!(data.get(ContactField::Email), "");
    }

    #[test]
    fn test_from_json() {
        let data = ContactData::from_json(r#"{"name":"Jo","service":"seo"}"#).unwrap();
        assert_eq!(data.get(ContactField::Name), "Jo");
        assert_eq!(data.get(ContactField::Service), "seo");
        assert!(ContactData::from_json(r#"{"phone":"1"}"#).is_err());
    }

    #[test]
    fn test_data_serializes_as_flat_object() {
        let data = ContactData::new().with(ContactField::Name, "Jo");
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"name":"Jo"}"#);
    }

    #[test]
    fn test_submission_requires_valid_data() {
        let invalid = valid_data().with(ContactField::Name, "J");
        let err = FormSubmission::new(&invalid).unwrap_err();
        assert_eq!(err.invalid_fields().count(), 1);

        let submission = FormSubmission::new(&valid_data()).unwrap();
        assert_eq!(submission.get(ContactField::Service), "consulting");
    }

    #[test]
    fn test_try_from_maps_to_form_error() {
        let result = FormSubmission::try_from(&ContactData::new());
        assert!(matches!(result, Err(FormError::ValidationErrors(e)) if e.len() == 4));
    }

    #[test]
    fn test_submission_json() {
        let json = FormSubmission::new(&valid_data()).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["email"], "jo@x.co");
        assert_eq!(value["message"], "0123456789");
    }
}
