//! Select field types.

use crate::contact::ContactField;
use crate::form::FormFieldDef;
use crate::widgets::SelectInput;

/// The service dropdown, offering `choices` as (value, label) pairs.
pub fn service_field(label: &str, choices: &[(String, String)]) -> FormFieldDef {
    let widget = SelectInput::new(choices.to_vec());
    FormFieldDef::new(ContactField::Service, label, widget).required()
}
