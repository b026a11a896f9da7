//! Errors shared by the model inference ports

use thiserror::Error;

/// Errors that can occur when calling an inference service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Model not available: {0}")]
    ModelUnavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}
