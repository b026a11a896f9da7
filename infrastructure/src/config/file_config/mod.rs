//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod models;
mod output;
mod providers;
mod repl;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileHuggingFaceConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use moodscribe_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Which models back the two ports
    pub models: FileModelsConfig,
    /// Generation parameters
    pub generation: FileGenerationConfig,
    /// Inference endpoint settings
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.validate());
        issues.extend(self.generation.validate());
        issues.extend(self.providers.huggingface.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscribe_domain::{ConfigIssueCode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
sentiment = "cardiffnlp/twitter-roberta-base-sentiment-latest"
generation = "distilgpt2"

[generation]
max_length = 200

[providers.huggingface]
base_url = "http://localhost:8080"
api_key = "hf_local"
timeout_seconds = 30
wait_for_model = false

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "/tmp/moodscribe-history.txt"

[logging]
conversation_log = "transcript.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models.sentiment,
            "cardiffnlp/twitter-roberta-base-sentiment-latest"
        );
        assert_eq!(config.models.generation, "distilgpt2");
        assert_eq!(config.generation.max_length, 200);
        assert_eq!(config.providers.huggingface.base_url, "http://localhost:8080");
        assert_eq!(config.providers.huggingface.timeout_seconds, Some(30));
        assert!(!config.providers.huggingface.wait_for_model);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.repl.history_size, 500);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("transcript.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[models]\ngeneration = \"gpt2-medium\"\n").unwrap();
        assert_eq!(config.models.generation, "gpt2-medium");
        assert_eq!(
            config.models.sentiment,
            "distilbert-base-uncased-finetuned-sst-2-english"
        );
        assert_eq!(config.generation.max_length, 150);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.models.generation, "gpt2");
        assert_eq!(config.generation.to_params().unwrap().max_length, 150);
        assert_eq!(config.output.format, None);
        assert!(config.logging.conversation_log.is_none());
        assert!(config.providers.huggingface.wait_for_model);
    }

    #[test]
    fn test_validate_reports_errors() {
        let mut config = FileConfig::default();
        config.models.sentiment = " ".to_string();
        config.generation.max_length = 0;
        config.providers.huggingface.base_url = String::new();
        config.providers.huggingface.api_key = Some("hf_set".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyModelName { field } if field == "models.sentiment"
        )));
        assert!(issues.iter().any(|i| matches!(i.code, ConfigIssueCode::EmptyBaseUrl)));
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let mut config = FileConfig::default();
        config.providers.huggingface.api_key_env =
            "MOODSCRIBE_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::MissingApiKey { .. }
        ));
    }
}
