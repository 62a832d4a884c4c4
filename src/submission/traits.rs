//! Trait abstraction for the submission client to enable mocking in tests

use crate::state::SubmissionPayload;
use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

/// Why a submission did not succeed
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
}

/// Result of a single submission attempt.
///
/// Failures are carried as a value rather than an `Err` so callers never
/// have to handle a submission error to keep going.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Decoded response body of a successful request
    Accepted(Value),
    Failed { error: SubmissionError },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// JSON view of the outcome: the response body on success, or
    /// `{"error": "<cause>"}` on failure
    pub fn into_value(self) -> Value {
        match self {
            Self::Accepted(body) => body,
            Self::Failed { error } => json!({ "error": error.to_string() }),
        }
    }
}

/// Trait for submission client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// POST the payload once. Never fails; see [`SubmissionOutcome`].
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome;
}
