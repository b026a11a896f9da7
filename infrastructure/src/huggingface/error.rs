//! Error types for the Hugging Face adapters

use moodscribe_application::InferenceError;
use thiserror::Error;

/// Result type alias for Hugging Face operations
pub type Result<T> = std::result::Result<T, HuggingFaceError>;

/// Errors that can occur when talking to an inference endpoint
#[derive(Error, Debug)]
pub enum HuggingFaceError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model {model} is loading{}", eta_suffix(.estimated_time))]
    ModelLoading {
        model: String,
        estimated_time: Option<f64>,
    },

    #[error("HTTP {status} from {model}: {message}")]
    Status {
        model: String,
        status: u16,
        message: String,
    },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("Invalid prediction: {0}")]
    InvalidPrediction(String),
}

fn eta_suffix(estimated_time: &Option<f64>) -> String {
    estimated_time
        .map(|t| format!(" (ready in ~{t:.0}s)"))
        .unwrap_or_default()
}

impl From<HuggingFaceError> for InferenceError {
    fn from(err: HuggingFaceError) -> Self {
        match err {
            HuggingFaceError::ModelLoading { .. } => InferenceError::ModelUnavailable(err.to_string()),
            HuggingFaceError::Status { status: 503, .. } => {
                InferenceError::ModelUnavailable(err.to_string())
            }
            HuggingFaceError::Status { .. } | HuggingFaceError::Transport(_) => {
                InferenceError::RequestFailed(err.to_string())
            }
            HuggingFaceError::Parse { .. }
            | HuggingFaceError::EmptyResponse(_)
            | HuggingFaceError::InvalidPrediction(_) => {
                InferenceError::MalformedResponse(err.to_string())
            }
            HuggingFaceError::ClientBuild(_) => InferenceError::Other(err.to_string()),
        }
    }
}
