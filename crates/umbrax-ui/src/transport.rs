//! Delivery of validated submissions.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;
use umbrax_forms::{ContactField, FormSubmission};

use crate::error::TransportError;

/// A boxed future for async transport operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// How long the simulated transport takes to settle.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// The service that receives contact submissions.
///
/// # Example
///
/// ```ignore
/// struct HttpTransport { client: Client, url: String }
///
/// impl SubmissionTransport for HttpTransport {
///     fn send<'a>(&'a self, submission: &'a FormSubmission)
///         -> BoxFuture<'a, Result<(), TransportError>>
///     {
///         Box::pin(async move {
///             let body = submission.to_json().map_err(|e| TransportError::Rejected(e.to_string()))?;
///             self.client.post(&self.url).body(body).send().await
///                 .map_err(|e| TransportError::Unavailable(e.to_string()))?;
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait SubmissionTransport: Send + Sync {
    /// Delivers `submission`, resolving once the service has answered.
    fn send<'a>(&'a self, submission: &'a FormSubmission)
        -> BoxFuture<'a, Result<(), TransportError>>;
}

/// Stand-in transport that waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    /// Creates a transport settling after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn send<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> BoxFuture<'a, Result<(), TransportError>> {
        Box::pin(async move {
            debug!(
                delay_ms = self.delay.as_millis(),
                email = %submission.get(ContactField::Email),
                "simulating submission"
            );
            tokio::time::sleep(self.delay).await;
            Ok(())
        })
    }
}
