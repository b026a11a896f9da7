//! Result of one sentiment-matched generation run

use crate::core::user_prompt::UserPrompt;
use crate::prompt::GenerationPrompt;
use crate::sentiment::label::SentimentLabel;
use crate::sentiment::value_objects::Sentiment;
use serde::{Deserialize, Serialize};

/// Everything produced by one run, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Text the user entered
    pub prompt: UserPrompt,
    /// Classifier verdict on the prompt
    pub sentiment: Sentiment,
    /// Templated prompt sent to the generator
    pub generation_prompt: GenerationPrompt,
    /// Raw first sequence from the generator
    pub generated_text: String,
    /// Generated text with the echoed prompt removed
    pub cleaned_text: String,
}

impl GenerationResult {
    pub fn label(&self) -> SentimentLabel {
        self.sentiment.label
    }

    /// Whether the generator echoed the prompt so it could be stripped
    pub fn prompt_was_echoed(&self) -> bool {
        self.generated_text
            .contains(self.generation_prompt.as_str())
    }
}
