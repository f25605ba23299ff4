//! Error types for GoetGevonden API operations

use serde_json::Value;
use thiserror::Error;

/// Master error type for all GoetGevonden API operations.
///
/// One variant per failure class; callers discriminate by matching on the
/// variant. Nothing is retried automatically.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GoetGevondenError {
    /// The transport could not reach the host at all.
    #[error("Failed to connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    /// The configured timeout elapsed before a response arrived.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The remote responded 404 for the requested path.
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// Any other non-2xx status. `body` is the parsed JSON error payload, or
    /// `{"message": <raw text>}` when the body is not valid JSON.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: Value },

    /// A caller-supplied argument was rejected before any request was issued.
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl GoetGevondenError {
    /// HTTP status associated with this error, if any.
    ///
    /// `NotFound` reports 404; it is the not-found specialization of [`Api`].
    ///
    /// [`Api`]: GoetGevondenError::Api
    pub fn status(&self) -> Option<u16> {
        match self {
            GoetGevondenError::NotFound { .. } => Some(404),
            GoetGevondenError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for GoetGevonden API operations.
pub type GoetGevondenResult<T> = Result<T, GoetGevondenError>;

// =============================================================================
// TESTS
// =============================================================================
