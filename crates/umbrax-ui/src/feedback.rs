//! Per-field error display.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use umbrax_forms::{validate_field, ContactField, FieldResult};

use crate::surface::FieldHandle;

/// Listener called after a field's display was updated.
pub type FieldChangeHandler = Arc<dyn Fn(ContactField, &FieldResult) + Send + Sync>;

/// Keeps each field's error mark and inline message in line with its
/// latest validation result.
#[derive(Clone)]
pub struct FieldFeedback {
    fields: BTreeMap<ContactField, Arc<dyn FieldHandle>>,
    listeners: Arc<Mutex<Vec<FieldChangeHandler>>>,
}

impl std::fmt::Debug for FieldFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldFeedback")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl FieldFeedback {
    /// Creates a controller over the given inputs.
    pub fn new(handles: impl IntoIterator<Item = Arc<dyn FieldHandle>>) -> Self {
        let fields = handles
            .into_iter()
            .map(|handle| (handle.field(), handle))
            .collect();
        Self {
            fields,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a listener for applied results.
    pub fn on_field_change<F>(&self, handler: F)
    where
        F: Fn(ContactField, &FieldResult) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(handler));
    }

    /// The handle of `field`, if the form has one.
    pub fn handle(&self, field: ContactField) -> Option<&Arc<dyn FieldHandle>> {
        self.fields.get(&field)
    }

    /// Handles of every field, in form order.
    pub fn handles(&self) -> impl Iterator<Item = &Arc<dyn FieldHandle>> {
        self.fields.values()
    }

    /// Makes `field`'s display match `result`. Applying the same result
    /// again changes nothing.
    pub fn apply_result(&self, field: ContactField, result: &FieldResult) {
        let Some(handle) = self.fields.get(&field) else {
            debug!(field = %field, "no handle for field");
            return;
        };

        if result.valid {
            handle.set_marked_invalid(false);
            handle.clear_error();
        } else {
            handle.set_marked_invalid(true);
            handle.show_error(result.message.as_deref().unwrap_or_default());
        }

        let listeners = self.listeners.lock().clone();
        for listener in &listeners {
            listener(field, result);
        }
    }

    /// Validates the field's current value and shows the result.
    pub fn on_blur(&self, field: ContactField) -> Option<FieldResult> {
        let handle = self.fields.get(&field)?;
        let result = validate_field(field, &handle.value());
        self.apply_result(field, &result);
        Some(result)
    }

    /// Re-validates while typing, but only once the field has failed.
    pub fn on_input(&self, field: ContactField) -> Option<FieldResult> {
        let handle = self.fields.get(&field)?;
        if !handle.is_marked_invalid() {
            return None;
        }
        let result = validate_field(field, &handle.value());
        self.apply_result(field, &result);
        Some(result)
    }

    /// Removes every field's error display.
    pub fn clear_all(&self) {
        for handle in self.fields.values() {
            handle.set_marked_invalid(false);
            handle.clear_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn feedback(doc: &Document) -> FieldFeedback {
        FieldFeedback::new(
            ContactField::ALL
                .into_iter()
                .map(|f| Arc::new(doc.field(f)) as Arc<dyn FieldHandle>),
        )
    }

    #[test]
    fn test_apply_invalid_then_valid() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);

        feedback.apply_result(ContactField::Name, &FieldResult::invalid("too short"));
        assert!(doc.field(ContactField::Name).is_marked_invalid());
        assert_eq!(doc.error_text(ContactField::Name).as_deref(), Some("too short"));

        feedback.apply_result(ContactField::Name, &FieldResult::valid());
        assert!(!doc.field(ContactField::Name).is_marked_invalid());
        assert_eq!(doc.error_node_count(ContactField::Name), 0);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);
        let result = FieldResult::invalid("bad");

        feedback.apply_result(ContactField::Email, &result);
        feedback.apply_result(ContactField::Email, &result);
        assert_eq!(doc.error_node_count(ContactField::Email), 1);

        feedback.apply_result(ContactField::Service, &FieldResult::valid());
        feedback.apply_result(ContactField::Service, &FieldResult::valid());
        assert_eq!(doc.error_node_count(ContactField::Service), 0);
        assert!(!doc.field(ContactField::Service).is_marked_invalid());
    }

    #[test]
    fn test_input_ignored_on_pristine_field() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);

        doc.field(ContactField::Name).set_value("a");
        assert_eq!(feedback.on_input(ContactField::Name), None);
        assert_eq!(doc.error_node_count(ContactField::Name), 0);
    }

    #[test]
    fn test_blur_then_corrective_input() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);
        let name = doc.field(ContactField::Name);

        name.set_value("a");
        let blurred = feedback.on_blur(ContactField::Name).unwrap();
        assert!(!blurred.valid);
        assert!(name.is_marked_invalid());

        name.set_value("ab");
        let typed = feedback.on_input(ContactField::Name).unwrap();
        assert!(typed.valid);
        assert!(!name.is_marked_invalid());
        assert_eq!(doc.error_node_count(ContactField::Name), 0);
    }

    #[test]
    fn test_listeners_see_applied_results() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        feedback.on_field_change(move |field, result| {
            assert_eq!(field, ContactField::Message);
            assert!(!result.valid);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        feedback.on_blur(ContactField::Message);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_all() {
        let doc = Document::contact_form();
        let feedback = feedback(&doc);
        for field in ContactField::ALL {
            feedback.on_blur(field);
        }
        assert!(ContactField::ALL.iter().all(|f| doc.error_node_count(*f) == 1));

        feedback.clear_all();
        assert!(ContactField::ALL.iter().all(|f| doc.error_node_count(*f) == 0));
    }
}
