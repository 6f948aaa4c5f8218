//! Field definitions and contact form rendering.

use ironhtml::html;
use ironhtml_elements::{Div, I};

use crate::contact::{ContactData, ContactField};
use crate::error::ValidationErrors;
use crate::widgets::{Widget, WidgetAttrs};

/// Class marking an input whose value failed validation.
pub const ERROR_CLASS: &str = "error";
/// Class of the inline message node placed after an invalid input.
pub const FIELD_ERROR_CLASS: &str = "field-error";
/// Class of the contact form element.
pub const FORM_CLASS: &str = "contact-form";
/// Default label of the submit control.
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Definition of a form field.
pub struct FormFieldDef {
    /// Which contact field this renders.
    pub field: ContactField,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(field: ContactField, label: impl Into<String>, widget: impl Widget + 'static) -> Self {
        Self {
            field,
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Renders one field group: label, widget and, when failing, its error node.
pub fn render_field(field: &FormFieldDef, value: Option<&str>, error: Option<&str>) -> String {
    let name = field.field.as_str();
    let id = format!("id_{name}");

    let mut attrs = field.attrs.clone();
    attrs.set("id", &id);

    if error.is_some() {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} {ERROR_CLASS}").trim());
    }

    if field.required {
        attrs.set("required", "required");
    }

    let widget_html = field.widget.render(name, value, &attrs);
    let label_text = field.label.clone();

    let label_el = html! {
        label.for_(#id) { #label_text }
    };

    html! { div.class("form-group") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| {
                e.class(FIELD_ERROR_CLASS).text(error.unwrap_or_default())
            })
        })
        .render()
}

/// Renders the contact form with current values and per-field errors.
pub fn render_contact_form(
    fields: &[FormFieldDef],
    data: &ContactData,
    errors: &ValidationErrors,
    submit_label: &str,
) -> String {
    let form_class = FORM_CLASS;
    let mut form = html! {
        form.class(#form_class).method("post")
    };

    for field in fields {
        let value = Some(data.get(field.field)).filter(|v| !v.is_empty());
        let field_html = render_field(field, value, errors.get(field.field));
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let label = format!(" {submit_label}");
    form.child::<Div, _>(|d| {
        let button = html! { button.type_("submit").class("btn btn-primary") }
            .child::<I, _>(|i| i.class("fas fa-paper-plane"))
            .text(label.as_str());
        d.raw(button.render())
    })
    .render()
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TextInput;

    #[test]
    fn test_field_def_builder() {
        let field = FormFieldDef::new(ContactField::Name, "Full Name", TextInput::new())
            .required()
            .attr("placeholder", "Jane Doe");

        assert_eq!(field.field, ContactField::Name);
        assert_eq!(field.label, "Full Name");
        assert!(field.required);
        assert_eq!(field.attrs.get("placeholder").map(String::as_str), Some("Jane Doe"));
    }

    #[test]
    fn test_render_field_no_error() {
        let field = FormFieldDef::new(ContactField::Email, "Email", TextInput::email()).required();

        let html = render_field(&field, Some("jo@x.co"), None);
        assert!(html.contains("form-group"));
        assert!(html.contains("Email"));
        assert!(html.contains(r#"value="jo@x.co""#));
        assert!(!html.contains(FIELD_ERROR_CLASS));
    }

    #[test]
    fn test_render_field_with_error() {
        let field = FormFieldDef::new(ContactField::Email, "Email", TextInput::email());

        let html = render_field(&field, None, Some("Please enter a valid email address"));
        assert!(html.contains("form-control error"));
        assert_eq!(html.matches(FIELD_ERROR_CLASS).count(), 1);
        assert!(html.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_render_contact_form() {
        let fields = crate::fields::contact_form_fields(&[]);
        let data = ContactData::new()
            .with(ContactField::Name, "Jo")
            .with(ContactField::Email, "jo@x");
        let mut errors = ValidationErrors::new();
        errors.add(ContactField::Email, "Please enter a valid email address");

        let html = render_contact_form(&fields, &data, &errors, DEFAULT_SUBMIT_LABEL);
        assert!(html.starts_with("<form"));
        assert!(html.contains(FORM_CLASS));
        assert!(html.contains(r#"value="Jo""#));
        assert_eq!(html.matches("form-group").count(), 4);
        assert_eq!(html.matches(FIELD_ERROR_CLASS).count(), 1);
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("fa-paper-plane"));
        assert!(html.contains("</i> Send Message"));
    }

    #[test]
    fn test_form_builder() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new(ContactField::Name, "Name", TextInput::new()).required())
            .field(FormFieldDef::new(ContactField::Email, "Email", TextInput::email()))
            .build();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, ContactField::Name);
        assert_eq!(fields[1].field, ContactField::Email);
    }
}
