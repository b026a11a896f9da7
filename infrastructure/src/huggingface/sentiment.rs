//! Sentiment classification over the Inference API

use super::client::HuggingFaceClient;
use super::error::{HuggingFaceError, Result};
use super::protocol::{ClassificationResponse, LabelScore, NoParameters};
use async_trait::async_trait;
use moodscribe_application::{InferenceError, SentimentClassifier};
use moodscribe_domain::Sentiment;
use tracing::debug;

/// [`SentimentClassifier`] backed by a `text-classification` model
pub struct HuggingFaceSentimentClassifier {
    client: HuggingFaceClient,
    model_id: String,
}

impl HuggingFaceSentimentClassifier {
    /// Binary SST-2 classifier: labels are `POSITIVE` / `NEGATIVE`
    pub const DEFAULT_MODEL: &'static str = "distilbert-base-uncased-finetuned-sst-2-english";

    pub fn new(client: HuggingFaceClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    async fn classify_raw(&self, text: &str) -> Result<Sentiment> {
        let response: ClassificationResponse = self
            .client
            .infer::<NoParameters, _>(&self.model_id, text, None)
            .await?;
        let candidates = response.into_candidates();
        debug!("{} returned {} candidate labels", self.model_id, candidates.len());
        self.best_candidate(candidates)
    }

    /// Highest-scoring candidate, validated into a [`Sentiment`]
    fn best_candidate(&self, candidates: Vec<LabelScore>) -> Result<Sentiment> {
        let best = candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| HuggingFaceError::EmptyResponse(self.model_id.clone()))?;

        Sentiment::from_model_output(best.label, best.score)
            .map_err(|e| HuggingFaceError::InvalidPrediction(e.to_string()))
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceSentimentClassifier {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn classify(&self, text: &str) -> std::result::Result<Sentiment, InferenceError> {
        self.classify_raw(text).await.map_err(InferenceError::from)
    }
}
