//! The submit control's Idle/Loading state machine.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};
use umbrax_forms::{ContactData, FormSubmission, FormValidation};

use crate::error::TransportError;
use crate::feedback::FieldFeedback;
use crate::notification::{Notifier, Severity};
use crate::surface::SubmitControl;
use crate::transport::SubmissionTransport;

/// Label shown while a submission is in flight.
pub const SENDING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
/// Notification raised after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
/// Notification raised when the transport fails.
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Loading,
}

/// What a submit attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(FormValidation),
    /// The transport accepted the submission and the form was cleared.
    Sent,
    /// The transport failed; field values were kept for a retry.
    Failed(TransportError),
}

impl SubmitOutcome {
    /// Whether the submission was delivered.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Texts used by the controller.
#[derive(Debug, Clone)]
pub struct SubmitMessages {
    pub sending_label: String,
    pub success: String,
    pub failure: String,
}

impl Default for SubmitMessages {
    fn default() -> Self {
        Self {
            sending_label: SENDING_LABEL.to_string(),
            success: SUCCESS_MESSAGE.to_string(),
            failure: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Listener called with every submit outcome.
pub type SubmitHandler = Arc<dyn Fn(&SubmitOutcome) + Send + Sync>;

/// Validates the whole form, drives the submit control through
/// Idle → Loading → Idle and reports the result.
///
/// The controller keeps no in-flight flag. A second submission cannot
/// start while one is pending because the control is disabled for the
/// whole Loading phase and the page drops activation of a disabled
/// control.
#[derive(Clone)]
pub struct SubmissionController {
    feedback: FieldFeedback,
    control: Arc<dyn SubmitControl>,
    transport: Arc<dyn SubmissionTransport>,
    notifier: Notifier,
    messages: SubmitMessages,
    state: Arc<Mutex<SubmitState>>,
    listeners: Arc<Mutex<Vec<SubmitHandler>>>,
}

impl fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("state", &self.state())
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    /// Creates a controller over the form's fields and submit control.
    pub fn new(
        feedback: FieldFeedback,
        control: Arc<dyn SubmitControl>,
        transport: Arc<dyn SubmissionTransport>,
        notifier: Notifier,
    ) -> Self {
        Self {
            feedback,
            control,
            transport,
            notifier,
            messages: SubmitMessages::default(),
            state: Arc::new(Mutex::new(SubmitState::Idle)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replaces the default texts.
    #[must_use]
    pub fn messages(mut self, messages: SubmitMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Registers a listener for submit outcomes.
    pub fn on_submit<F>(&self, handler: F)
    where
        F: Fn(&SubmitOutcome) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(handler));
    }

    /// Current state of the submit control.
    pub fn state(&self) -> SubmitState {
        *self.state.lock()
    }

    /// The submit control this controller drives.
    pub fn control(&self) -> &Arc<dyn SubmitControl> {
        &self.control
    }

    /// The field feedback controller.
    pub fn feedback(&self) -> &FieldFeedback {
        &self.feedback
    }

    /// Runs one submit attempt with the fields' current values.
    pub async fn submit(&self) -> SubmitOutcome {
        let data = self.collect();
        let submission = match FormSubmission::new(&data) {
            Ok(submission) => submission,
            Err(validation) => {
                for (field, result) in validation.invalid_fields() {
                    self.feedback.apply_result(field, result);
                }
                info!(errors = %validation.errors(), "submission rejected");
                return self.finish(SubmitOutcome::Rejected(validation));
            }
        };

        self.feedback.clear_all();
        let idle_label = self.enter_loading();

        let delivered = self.transport.send(&submission).await;
        drop(submission);

        self.leave_loading(&idle_label);

        let outcome = match delivered {
            Ok(()) => {
                self.notifier.show(self.messages.success.clone(), Severity::Success);
                self.reset_fields();
                info!("submission sent");
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.notifier.show(self.messages.failure.clone(), Severity::Error);
                SubmitOutcome::Failed(err)
            }
        };
        self.finish(outcome)
    }

    fn collect(&self) -> ContactData {
        let mut data = ContactData::new();
        for handle in self.feedback.handles() {
            data.set(handle.field(), handle.value());
        }
        data
    }

    /// Disables the control and shows the busy label. Returns the label to
    /// restore afterwards.
    fn enter_loading(&self) -> String {
        let idle_label = self.control.label();
        self.control.set_label(&self.messages.sending_label);
        self.control.set_disabled(true);
        *self.state.lock() = SubmitState::Loading;
        info!("submit control loading");
        idle_label
    }

    fn leave_loading(&self, idle_label: &str) {
        self.control.set_label(idle_label);
        self.control.set_disabled(false);
        *self.state.lock() = SubmitState::Idle;
        info!("submit control idle");
    }

    fn reset_fields(&self) {
        for handle in self.feedback.handles() {
            handle.set_value("");
        }
    }

    fn finish(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        let listeners = self.listeners.lock().clone();
        for listener in &listeners {
            listener(&outcome);
        }
        outcome
    }
}
