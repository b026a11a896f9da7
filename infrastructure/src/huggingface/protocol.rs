//! Wire types for the Inference API
//!
//! Request bodies are `{"inputs": ..., "parameters": {...}, "options": {...}}`.
//! Response shapes vary between deployments, so the response types accept
//! every shape seen in practice through `#[serde(untagged)]`.

use serde::{Deserialize, Serialize};

/// Request body shared by every task
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a, P: Serialize> {
    pub inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RequestOptions>,
}

/// Task-independent request options
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestOptions {
    /// Block until a cold model is loaded instead of answering 503
    pub wait_for_model: bool,
}

/// `parameters` for text-generation requests
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub num_return_sequences: u32,
    /// Keep the prompt in the output, matching local pipeline behavior
    pub return_full_text: bool,
}

/// Text-classification parameters are unused; serializes to nothing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoParameters {}

/// One candidate label from a classifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Classification response: `[[{label, score}, ...]]` or `[{label, score}, ...]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    /// Candidates for the first (and only) input
    pub fn into_candidates(self) -> Vec<LabelScore> {
        match self {
            ClassificationResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            ClassificationResponse::Flat(list) => list,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSequence {
    pub generated_text: String,
}

/// Generation response: a list of sequences, or a single object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Many(Vec<GeneratedSequence>),
    One(GeneratedSequence),
}

impl GenerationResponse {
    pub fn into_texts(self) -> Vec<String> {
        match self {
            GenerationResponse::Many(seqs) => seqs.into_iter().map(|s| s.generated_text).collect(),
            GenerationResponse::One(seq) => vec![seq.generated_text],
        }
    }
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

/// `error` is usually a string but some deployments send a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorMessage::One(msg) => write!(f, "{msg}"),
            ErrorMessage::Many(msgs) => write!(f, "{}", msgs.join("; ")),
        }
    }
}
