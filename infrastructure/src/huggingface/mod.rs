//! Hugging Face Inference API adapters
//!
//! Both model ports are served over the same HTTP protocol: `POST` JSON to
//! `{base_url}/models/{model_id}`. This works against the hosted Inference
//! API as well as self-hosted servers exposing the same routes.
//!
//! - [`HuggingFaceClient`]: shared HTTP plumbing and error classification
//! - [`HuggingFaceSentimentClassifier`]: `text-classification` models
//! - [`HuggingFaceTextGenerator`]: `text-generation` models

pub mod client;
pub mod error;
pub mod generation;
pub mod protocol;
pub mod sentiment;

pub use client::HuggingFaceClient;
pub use error::HuggingFaceError;
pub use generation::HuggingFaceTextGenerator;
pub use sentiment::HuggingFaceSentimentClassifier;
