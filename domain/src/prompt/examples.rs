//! Built-in example prompts, one per sentiment

use crate::core::error::DomainError;
use crate::sentiment::label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Example prompts offered to users who don't know what to type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamplePrompt {
    Positive,
    Negative,
    Neutral,
}

impl ExamplePrompt {
    /// Placeholder shown before the user has typed anything
    pub const PLACEHOLDER: &'static str = "I had an amazing vacation in the mountains!";

    pub fn all() -> [ExamplePrompt; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Positive => {
                "The sunny weather today makes me feel incredibly happy and optimistic."
            }
            Self::Negative => {
                "The constant rain and canceled plans have left me feeling gloomy and disappointed."
            }
            Self::Neutral => "The new library downtown is scheduled to open next Tuesday.",
        }
    }

    /// Sentiment the example is written to exhibit
    pub fn expected_sentiment(&self) -> SentimentLabel {
        match self {
            Self::Positive => SentimentLabel::Positive,
            Self::Negative => SentimentLabel::Negative,
            Self::Neutral => SentimentLabel::Neutral,
        }
    }
}

impl std::fmt::Display for ExamplePrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ExamplePrompt {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => Ok(Self::Positive),
            "negative" | "neg" => Ok(Self::Negative),
            "neutral" | "neu" => Ok(Self::Neutral),
            other => Err(DomainError::UnknownExample(other.to_string())),
        }
    }
}
