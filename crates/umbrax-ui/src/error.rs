//! Error types for the page controllers.

use thiserror::Error;
use umbrax_forms::FormError;

/// Failure reported by a submission transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The remote service rejected the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The remote service could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while dispatching page events.
#[derive(Debug, Error)]
pub enum UiError {
    /// The event named a field the form does not have.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The submission could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias for page operations.
pub type Result<T> = std::result::Result<T, UiError>;
