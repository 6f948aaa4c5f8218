//! Field definitions of the contact form.

mod select;
mod text;

pub use select::service_field;
pub use text::{email_field, message_field, name_field};

use crate::form::{FormBuilder, FormFieldDef};

/// The four contact form fields in page order.
pub fn contact_form_fields(services: &[(String, String)]) -> Vec<FormFieldDef> {
    FormBuilder::new()
        .field(name_field("Full Name"))
        .field(email_field("Email Address"))
        .field(service_field("Service Interested In", services))
        .field(message_field("Message", 5))
        .build()
}
