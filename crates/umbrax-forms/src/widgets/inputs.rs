//! Input, textarea and select widgets used by the contact form.

use super::{html_escape, Widget, WidgetAttrs};

/// Single-line text input.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type (text, email, ...).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl TextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self {
            input_type: "email".to_string(),
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}{}>"#,
            self.input_type,
            attrs.class_with("form-control"),
            attrs.id_or(name),
            name,
            value_attr,
            placeholder_attr,
            attrs.extra_html()
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Multi-line text input.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Number of rows.
    pub rows: usize,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for Textarea {
    fn default() -> Self {
        Self {
            rows: 5,
            placeholder: None,
        }
    }
}

impl Textarea {
    /// Creates a new textarea with the specified rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{placeholder_attr}{}>{}</textarea>"#,
            attrs.class_with("form-control"),
            attrs.id_or(name),
            name,
            self.rows,
            attrs.extra_html(),
            content
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// Dropdown select with a leading blank option.
#[derive(Debug, Clone)]
pub struct SelectInput {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Label of the blank option, whose value is empty.
    pub blank_label: String,
}

impl SelectInput {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            blank_label: "Select a service".to_string(),
        }
    }

    /// Sets the blank label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl Widget for SelectInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = format!(
            r#"<option value="">{}</option>"#,
            html_escape(&self.blank_label)
        );

        for (opt_value, label) in &self.choices {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{}</select>"#,
            attrs.class_with("form-select"),
            attrs.id_or(name),
            name,
            attrs.extra_html(),
            options
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let widget = TextInput::new().placeholder("Your name");
        let html = widget.render("name", None, &WidgetAttrs::new());
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"placeholder="Your name""#));
    }

    #[test]
    fn test_email_input_escapes_value() {
        let widget = TextInput::email();
        let html = widget.render("email", Some(r#"a"b@c.co"#), &WidgetAttrs::new());
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"value="a&quot;b@c.co""#));
    }

    #[test]
    fn test_textarea_with_error_class() {
        let widget = Textarea::new(6);
        let attrs = WidgetAttrs::new().with("class", "error");
        let html = widget.render("message", Some("Hello"), &attrs);
        assert!(html.contains(r#"class="form-control error""#));
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains(">Hello</textarea>"));
    }

    #[test]
    fn test_select_marks_selected() {
        let widget = SelectInput::new(vec![("web", "Web Development"), ("seo", "SEO")]);
        let html = widget.render("service", Some("seo"), &WidgetAttrs::new());
        assert!(html.contains(r#"class="form-select""#));
        assert!(html.contains(r#"<option value="">Select a service</option>"#));
        assert!(html.contains(r#"value="seo" selected"#));
        assert!(!html.contains(r#"value="web" selected"#));
    }
}
