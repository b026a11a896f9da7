//! Sentiment verdict value object

use super::label::SentimentLabel;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Classifier verdict for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Label mapped onto the fixed vocabulary
    pub label: SentimentLabel,
    /// Label string exactly as the classifier returned it
    pub raw_label: String,
    /// Confidence in [0, 1]
    pub score: f32,
}

impl Sentiment {
    /// Build a verdict from a native label and score.
    ///
    /// Fails if the score is not a finite value in [0, 1].
    pub fn from_model_output(raw_label: impl Into<String>, score: f32) -> Result<Self, DomainError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(DomainError::InvalidScore(score));
        }
        let raw_label = raw_label.into();
        Ok(Self {
            label: SentimentLabel::from_model_label(&raw_label),
            raw_label,
            score,
        })
    }

    /// Whether the native label was outside the known vocabulary
    pub fn is_fallback(&self) -> bool {
        SentimentLabel::recognize(&self.raw_label).is_none()
    }

    /// Score as a whole percentage, for display
    pub fn confidence_percent(&self) -> u8 {
        (self.score * 100.0).round() as u8
    }
}
