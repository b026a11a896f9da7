//! Provider configuration from TOML (`[providers]` section)

use moodscribe_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hugging Face Inference API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHuggingFaceConfig {
    /// Endpoint root; models are served under `{base_url}/models/{id}`.
    pub base_url: String,
    /// Environment variable holding the API token (default: "HF_TOKEN").
    pub api_key_env: String,
    /// Direct API token; prefer the env var.
    pub api_key: Option<String>,
    /// HTTP timeout; unset means wait for as long as inference takes.
    pub timeout_seconds: Option<u64>,
    /// Ask the endpoint to hold requests while a cold model loads.
    pub wait_for_model: bool,
}

impl Default for FileHuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            api_key_env: "HF_TOKEN".to_string(),
            api_key: None,
            timeout_seconds: None,
            wait_for_model: true,
        }
    }
}

impl FileHuggingFaceConfig {
    /// Token from `api_key`, falling back to the `api_key_env` variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                "providers.huggingface.base_url cannot be empty",
            ));
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.huggingface.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                "providers.huggingface.timeout_seconds must be greater than zero",
            ));
        }
        if self.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    env_var: self.api_key_env.clone(),
                },
                format!(
                    "No API token found (set {} or providers.huggingface.api_key); requests will be anonymous",
                    self.api_key_env
                ),
            ));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Hugging Face Inference API settings.
    pub huggingface: FileHuggingFaceConfig,
}
