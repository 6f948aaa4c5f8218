//! Text field types.

use crate::contact::ContactField;
use crate::form::FormFieldDef;
use crate::widgets::{TextInput, Textarea};

/// The sender's name.
pub fn name_field(label: &str) -> FormFieldDef {
    FormFieldDef::new(
        ContactField::Name,
        label,
        TextInput::new().placeholder("Your name"),
    )
    .required()
}

/// The sender's email address.
pub fn email_field(label: &str) -> FormFieldDef {
    FormFieldDef::new(
        ContactField::Email,
        label,
        TextInput::email().placeholder("you@example.com"),
    )
    .required()
}

/// The message body.
pub fn message_field(label: &str, rows: usize) -> FormFieldDef {
    FormFieldDef::new(
        ContactField::Message,
        label,
        Textarea::new(rows).placeholder("Tell us about your project"),
    )
    .required()
}
