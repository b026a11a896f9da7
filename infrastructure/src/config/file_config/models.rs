//! Model selection from TOML (`[models]` section)

use moodscribe_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model id of the sentiment classifier
    pub sentiment: String,
    /// Model id of the causal text generator
    pub generation: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            sentiment: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
            generation: "gpt2".to_string(),
        }
    }
}

impl FileModelsConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        [("models.sentiment", &self.sentiment), ("models.generation", &self.generation)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| {
                ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("{field}: model id cannot be empty"),
                )
            })
            .collect()
    }
}
