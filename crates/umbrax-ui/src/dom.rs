//! In-memory rendering surface.
//!
//! [`Document`] holds the state a browser would keep for the contact
//! section: input values and classes, inline error nodes, the submit
//! button and attached notifications. It backs headless runs and tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use parking_lot::Mutex;
use umbrax_forms::{ContactField, ERROR_CLASS};

use crate::notification::{Notification, NotificationId};
use crate::surface::{FieldHandle, NotificationHost, SubmitControl};

/// Default markup of the submit button.
pub const DEFAULT_SUBMIT_MARKUP: &str = "<i class=\"fas fa-paper-plane\"></i> Send Message";

#[derive(Debug, Default)]
struct FieldNode {
    value: String,
    classes: BTreeSet<String>,
    /// Error message nodes following the input, in document order.
    error_nodes: Vec<String>,
}

#[derive(Debug)]
struct ButtonNode {
    label: String,
    disabled: bool,
}

#[derive(Debug)]
struct DomState {
    fields: BTreeMap<ContactField, FieldNode>,
    submit: ButtonNode,
    notifications: Vec<Notification>,
}

/// The contact section of a page.
#[derive(Debug, Clone)]
pub struct Document {
    state: Arc<Mutex<DomState>>,
}

impl Document {
    /// A page with the four contact inputs and a submit button.
    pub fn contact_form() -> Self {
        Self::with_submit_label(DEFAULT_SUBMIT_MARKUP)
    }

    /// Like [`Document::contact_form`] with a custom submit label.
    pub fn with_submit_label(label: &str) -> Self {
        let fields = ContactField::ALL
            .into_iter()
            .map(|field| (field, FieldNode::default()))
            .collect();
        Self {
            state: Arc::new(Mutex::new(DomState {
                fields,
                submit: ButtonNode {
                    label: label.to_string(),
                    disabled: false,
                },
                notifications: Vec::new(),
            })),
        }
    }

    /// Handle to one input.
    pub fn field(&self, field: ContactField) -> DomField {
        DomField {
            state: Arc::clone(&self.state),
            field,
        }
    }

    /// Handle to the submit button.
    pub fn submit_button(&self) -> DomButton {
        DomButton {
            state: Arc::clone(&self.state),
        }
    }

    /// Handle to the notification attachment point.
    pub fn notification_layer(&self) -> DomNotifications {
        DomNotifications {
            state: Arc::clone(&self.state),
        }
    }

    /// Number of inline error nodes after `field`.
    pub fn error_node_count(&self, field: ContactField) -> usize {
        self.state.lock().fields[&field].error_nodes.len()
    }

    /// Text of the first inline error node after `field`.
    pub fn error_text(&self, field: ContactField) -> Option<String> {
        self.state.lock().fields[&field].error_nodes.first().cloned()
    }

    /// Currently attached notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state.lock().notifications.clone()
    }
}

/// An input in a [`Document`].
#[derive(Debug, Clone)]
pub struct DomField {
    state: Arc<Mutex<DomState>>,
    field: ContactField,
}

impl DomField {
    fn with_node<R>(&self, f: impl FnOnce(&mut FieldNode) -> R) -> R {
        let mut state = self.state.lock();
        let node = state.fields.entry(self.field).or_default();
        f(node)
    }
}

impl FieldHandle for DomField {
    fn field(&self) -> ContactField {
        self.field
    }

    fn value(&self) -> String {
        self.with_node(|node| node.value.clone())
    }

    fn set_value(&self, value: &str) {
        self.with_node(|node| node.value = value.to_string());
    }

    fn is_marked_invalid(&self) -> bool {
        self.with_node(|node| node.classes.contains(ERROR_CLASS))
    }

    fn set_marked_invalid(&self, invalid: bool) {
        self.with_node(|node| {
            if invalid {
                node.classes.insert(ERROR_CLASS.to_string());
            } else {
                node.classes.remove(ERROR_CLASS);
            }
        });
    }

    fn show_error(&self, message: &str) {
        self.with_node(|node| {
            node.error_nodes.clear();
            node.error_nodes.push(message.to_string());
        });
    }

    fn clear_error(&self) {
        self.with_node(|node| node.error_nodes.clear());
    }
}

/// The submit button of a [`Document`].
#[derive(Debug, Clone)]
pub struct DomButton {
    state: Arc<Mutex<DomState>>,
}

impl SubmitControl for DomButton {
    fn label(&self) -> String {
        self.state.lock().submit.label.clone()
    }

    fn set_label(&self, label: &str) {
        self.state.lock().submit.label = label.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state.lock().submit.disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.lock().submit.disabled = disabled;
    }
}

/// Notification layer of a [`Document`].
#[derive(Debug, Clone)]
pub struct DomNotifications {
    state: Arc<Mutex<DomState>>,
}

impl NotificationHost for DomNotifications {
    fn attach(&self, notification: &Notification) {
        self.state.lock().notifications.push(notification.clone());
    }

    fn detach(&self, id: NotificationId) {
        self.state.lock().notifications.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_error_keeps_single_node() {
        let doc = Document::contact_form();
        let name = doc.field(ContactField::Name);

        name.show_error("first");
        name.show_error("second");
        assert_eq!(doc.error_node_count(ContactField::Name), 1);
        assert_eq!(doc.error_text(ContactField::Name).as_deref(), Some("second"));

        name.clear_error();
        assert_eq!(doc.error_node_count(ContactField::Name), 0);
    }

    #[test]
    fn test_error_mark() {
        let doc = Document::contact_form();
        let email = doc.field(ContactField::Email);
        assert!(!email.is_marked_invalid());
        email.set_marked_invalid(true);
        assert!(email.is_marked_invalid());
        email.set_marked_invalid(false);
        assert!(!email.is_marked_invalid());
    }

    #[test]
    fn test_handles_share_state() {
        let doc = Document::contact_form();
        doc.field(ContactField::Message).set_value("hello");
        assert_eq!(doc.field(ContactField::Message).value(), "hello");

        let button = doc.submit_button();
        button.set_disabled(true);
        assert!(doc.submit_button().is_disabled());
        assert_eq!(button.label(), DEFAULT_SUBMIT_MARKUP);
    }
}
