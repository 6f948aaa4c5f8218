#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use umbrax_forms::{ContactField, FormSubmission};
use umbrax_ui::{BoxFuture, ContactPage, Document, SubmissionTransport, TransportError};

/// Transport that records every submission it receives and answers with a
/// fixed result after `delay`.
pub struct RecordingTransport {
    delay: Duration,
    answer: Result<(), TransportError>,
    received: Mutex<Vec<FormSubmission>>,
}

impl RecordingTransport {
    pub fn accepting(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            answer: Ok(()),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(delay: Duration, error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            delay,
            answer: Err(error),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn count(&self) -> usize {
        self.received.lock().len()
    }

    pub fn received(&self) -> Vec<FormSubmission> {
        self.received.lock().clone()
    }
}

impl SubmissionTransport for RecordingTransport {
    fn send<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> BoxFuture<'a, Result<(), TransportError>> {
        Box::pin(async move {
            self.received.lock().push(submission.clone());
            tokio::time::sleep(self.delay).await;
            self.answer.clone()
        })
    }
}

pub const SEND_DELAY: Duration = Duration::from_millis(2000);
pub const DISPLAY: Duration = Duration::from_millis(5000);

pub fn page_with(transport: Arc<RecordingTransport>) -> ContactPage {
    ContactPage::new(Document::contact_form(), transport, DISPLAY)
}

/// Types a valid value into every field.
pub fn fill_valid(page: &ContactPage) {
    page.input(ContactField::Name, "Jo");
    page.input(ContactField::Email, "jo@x.co");
    page.input(ContactField::Service, "consulting");
    page.input(ContactField::Message, "0123456789");
}

pub fn values(page: &ContactPage) -> Vec<String> {
    use umbrax_ui::FieldHandle;

    ContactField::ALL
        .into_iter()
        .map(|field| page.document().field(field).value())
        .collect()
}
