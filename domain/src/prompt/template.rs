//! Prompt template for sentiment-matched generation

use crate::core::user_prompt::UserPrompt;
use crate::sentiment::label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the generator for a paragraph in the detected tone.
    ///
    /// The user's text is embedded verbatim after the label word.
    pub fn generation(sentiment: SentimentLabel, prompt: &UserPrompt) -> GenerationPrompt {
        GenerationPrompt(format!(
            "Write a {} paragraph about the following topic: {}",
            sentiment.prompt_word(),
            prompt.as_str()
        ))
    }
}

/// Text handed to the generator (Value Object)
///
/// Only ever produced by [`PromptTemplate`]; kept around after generation
/// so the echoed copy can be stripped from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationPrompt(String);

impl GenerationPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenerationPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GenerationPrompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
