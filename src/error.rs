use thiserror::Error;

use crate::policy::PolicyResult;

/// Failure to obtain a well-formed response from the backend.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why a submission did not end in navigation.
///
/// By the time one of these is returned the page has already been told
/// whatever the user should see.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Password does not satisfy the policy: {}", .0.reasons().join("; "))]
    Validation(PolicyResult),
    #[error("Rejected by backend: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("A submission is already in progress")]
    InProgress,
}
