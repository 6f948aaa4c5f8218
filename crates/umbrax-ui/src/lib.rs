//! # umbrax-ui
//!
//! Page-side behavior of the Umbrax site.
//!
//! This crate provides:
//! - Handles onto the rendering surface and an in-memory [`Document`]
//! - [`FieldFeedback`]: inline error display per field
//! - [`SubmissionController`]: the submit control's Idle/Loading state machine
//! - [`Notifier`]: at most one transient notification at a time
//! - [`SubmissionTransport`]: the service contact submissions go to
//! - [`effects`]: scroll, parallax, reveal, counter, typing and navigation helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use umbrax_forms::ContactField;
//! use umbrax_ui::{ContactPage, Document, SimulatedTransport, SubmitOutcome};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let page = ContactPage::new(
//!     Document::contact_form(),
//!     Arc::new(SimulatedTransport::new(Duration::from_millis(10))),
//!     Duration::from_secs(5),
//! );
//!
//! page.input(ContactField::Name, "Jo");
//! page.input(ContactField::Email, "jo@x.co");
//! page.input(ContactField::Service, "consulting");
//! page.input(ContactField::Message, "0123456789");
//!
//! assert_eq!(page.submit().await, Some(SubmitOutcome::Sent));
//! assert_eq!(page.document().notifications().len(), 1);
//! # }
//! ```

mod dom;
pub mod effects;
mod error;
mod feedback;
mod notification;
mod page;
mod submission;
mod surface;
mod transport;

pub use dom::{Document, DomButton, DomField, DomNotifications, DEFAULT_SUBMIT_MARKUP};
pub use error::{Result, TransportError, UiError};
pub use feedback::{FieldChangeHandler, FieldFeedback};
pub use notification::{Notification, NotificationId, Notifier, Severity, DEFAULT_DISPLAY};
pub use page::ContactPage;
pub use submission::{
    SubmissionController, SubmitHandler, SubmitMessages, SubmitOutcome, SubmitState,
    FAILURE_MESSAGE, SENDING_LABEL, SUCCESS_MESSAGE,
};
pub use surface::{FieldHandle, NotificationHost, SubmitControl};
pub use transport::{BoxFuture, SimulatedTransport, SubmissionTransport, DEFAULT_SUBMIT_DELAY};
