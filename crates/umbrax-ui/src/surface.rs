//! Handles onto the rendering surface.
//!
//! Controllers receive these handles at construction and never look
//! anything up from page state themselves.

use umbrax_forms::ContactField;

use crate::notification::{Notification, NotificationId};

/// One input of the contact form.
pub trait FieldHandle: Send + Sync {
    /// Which field this is.
    fn field(&self) -> ContactField;

    /// Current raw value.
    fn value(&self) -> String;

    /// Replaces the value.
    fn set_value(&self, value: &str);

    /// Whether the input carries the error mark.
    fn is_marked_invalid(&self) -> bool;

    /// Adds or removes the error mark.
    fn set_marked_invalid(&self, invalid: bool);

    /// Makes the inline error node after the input show `message`,
    /// creating it if needed. Never leaves more than one node.
    fn show_error(&self, message: &str);

    /// Removes the inline error node, if any.
    fn clear_error(&self);
}

/// The form's submit button.
pub trait SubmitControl: Send + Sync {
    /// Current label markup.
    fn label(&self) -> String;

    /// Replaces the label markup.
    fn set_label(&self, label: &str);

    /// Whether activation is blocked.
    fn is_disabled(&self) -> bool;

    /// Enables or disables the control.
    fn set_disabled(&self, disabled: bool);
}

/// Where notifications are attached on the page.
pub trait NotificationHost: Send + Sync {
    /// Adds a notification node.
    fn attach(&self, notification: &Notification);

    /// Removes the node of `id`. Unknown ids are ignored.
    fn detach(&self, id: NotificationId);
}
