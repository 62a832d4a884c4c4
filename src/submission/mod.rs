//! Submission client module for posting the form over HTTP

mod client;
mod traits;

pub use client::{SubmissionClient, DEFAULT_BASE_URL};
pub use traits::{SubmissionClientTrait, SubmissionOutcome};

#[cfg(test)]
pub use traits::{MockSubmissionClientTrait, SubmissionError};
