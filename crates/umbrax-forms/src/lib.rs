//! # umbrax-forms
//!
//! The contact form of the Umbrax site: field rules, validation and HTML
//! rendering.
//!
//! This crate provides:
//! - The closed contact field set (`name`, `email`, `service`, `message`)
//! - Pure per-field and whole-form validation
//! - [`FormSubmission`], which only exists for fully valid data
//! - Rendering of the form with inline error nodes
//!
//! ## Validation
//!
//! ```rust
//! use umbrax_forms::{validate_field, validate_form, ContactData, ContactField};
//!
//! let result = validate_field(ContactField::Name, "a");
//! assert!(!result.valid);
//! assert_eq!(
//!     result.message.as_deref(),
//!     Some("Name must be at least 2 characters"),
//! );
//!
//! let data = ContactData::new()
//!     .with(ContactField::Name, "Jo")
//!     .with(ContactField::Email, "jo@x.co")
//!     .with(ContactField::Service, "consulting")
//!     .with(ContactField::Message, "0123456789");
//! assert!(validate_form(&data).is_valid());
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use umbrax_forms::fields::contact_form_fields;
//! use umbrax_forms::{render_contact_form, ContactData, ValidationErrors};
//!
//! let services = vec![("web".to_string(), "Web Development".to_string())];
//! let fields = contact_form_fields(&services);
//! let html = render_contact_form(
//!     &fields,
//!     &ContactData::new(),
//!     &ValidationErrors::new(),
//!     "Send Message",
//! );
//! assert!(html.contains("contact-form"));
//! ```

pub mod contact;
mod error;
pub mod fields;
mod form;
pub mod validation;
pub mod widgets;

pub use contact::{
    validate_field, validate_form, validate_named, ContactData, ContactField, FieldResult,
    FormSubmission, FormValidation,
};
pub use error::{FormError, Result, ValidationErrors};
pub use form::{
    render_contact_form, render_field, FormBuilder, FormFieldDef, DEFAULT_SUBMIT_LABEL,
    ERROR_CLASS, FIELD_ERROR_CLASS, FORM_CLASS,
};
