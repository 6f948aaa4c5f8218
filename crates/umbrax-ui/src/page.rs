//! Event wiring of the contact section.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use umbrax_forms::{ContactField, FieldResult};

use crate::dom::Document;
use crate::error::Result;
use crate::feedback::FieldFeedback;
use crate::notification::Notifier;
use crate::submission::{SubmissionController, SubmitMessages, SubmitOutcome};
use crate::surface::FieldHandle;
use crate::transport::SubmissionTransport;

/// Routes input, blur and submit events from a [`Document`] to the
/// controllers.
#[derive(Debug, Clone)]
pub struct ContactPage {
    document: Document,
    submission: SubmissionController,
}

impl ContactPage {
    /// Wires `document` to a submission controller using `transport`.
    pub fn new(
        document: Document,
        transport: Arc<dyn SubmissionTransport>,
        notification_display: Duration,
    ) -> Self {
        let feedback = FieldFeedback::new(
            ContactField::ALL
                .into_iter()
                .map(|field| Arc::new(document.field(field)) as Arc<dyn FieldHandle>),
        );
        let notifier =
            Notifier::with_display(Arc::new(document.notification_layer()), notification_display);
        let submission = SubmissionController::new(
            feedback,
            Arc::new(document.submit_button()),
            transport,
            notifier,
        );
        Self {
            document,
            submission,
        }
    }

    /// Replaces the controller's texts.
    #[must_use]
    pub fn messages(mut self, messages: SubmitMessages) -> Self {
        self.submission = self.submission.messages(messages);
        self
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The submission controller.
    pub fn controller(&self) -> &SubmissionController {
        &self.submission
    }

    /// The field feedback controller.
    pub fn feedback(&self) -> &FieldFeedback {
        self.submission.feedback()
    }

    /// The user typed into `field`, which now holds `value`.
    pub fn input(&self, field: ContactField, value: &str) -> Option<FieldResult> {
        self.document.field(field).set_value(value);
        self.feedback().on_input(field)
    }

    /// `field` lost focus.
    pub fn blur(&self, field: ContactField) -> Option<FieldResult> {
        self.feedback().on_blur(field)
    }

    /// Like [`ContactPage::input`] for an input identified by name.
    pub fn input_named(&self, name: &str, value: &str) -> Result<Option<FieldResult>> {
        let field = name.parse::<ContactField>()?;
        Ok(self.input(field, value))
    }

    /// Like [`ContactPage::blur`] for an input identified by name.
    pub fn blur_named(&self, name: &str) -> Result<Option<FieldResult>> {
        let field = name.parse::<ContactField>()?;
        Ok(self.blur(field))
    }

    /// The user activated the submit control.
    ///
    /// Returns `None` when the control is disabled, in which case the
    /// activation never reaches the controller.
    pub async fn submit(&self) -> Option<SubmitOutcome> {
        if self.submission.control().is_disabled() {
            debug!("submit activation dropped: control disabled");
            return None;
        }
        Some(self.submission.submit().await)
    }
}
