//! Generation settings from TOML (`[generation]` section)

use moodscribe_domain::{ConfigIssue, ConfigIssueCode, DomainError, GenerationParams};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Upper bound on output length, echoed prompt included
    pub max_length: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            max_length: GenerationParams::DEFAULT_MAX_LENGTH,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> Result<GenerationParams, DomainError> {
        GenerationParams::new(self.max_length)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.to_params() {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.max_length".to_string(),
                    value: self.max_length.to_string(),
                },
                format!("generation.max_length: {e}"),
            )],
        }
    }
}
