//! Sentiment classifier port
//!
//! Defines the interface for detecting the sentiment of free text.

use super::inference::InferenceError;
use async_trait::async_trait;
use moodscribe_domain::Sentiment;

/// Classifier mapping text to a [`Sentiment`]
///
/// Implementations (adapters) live in the infrastructure layer. They are
/// built once and shared read-only, hence `Send + Sync` and `&self`.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Identifier of the underlying model, for logs and display
    fn model_id(&self) -> &str;

    /// Classify `text`. Not retried on failure.
    async fn classify(&self, text: &str) -> Result<Sentiment, InferenceError>;
}
