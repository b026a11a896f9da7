//! Presentation-level configuration
//!
//! Runtime settings for output formatting and the interactive loop, resolved
//! from the config file and CLI flags by the binary.

use moodscribe_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable coloured terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the colour setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
    /// Number of history entries kept
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            history_size: 500,
        }
    }
}

impl ReplConfig {
    /// Resolved history file location
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("moodscribe").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/ms-history")),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/ms-history")));
    }

    #[test]
    fn test_default_history_path_under_data_dir() {
        let config = ReplConfig::default();
        if let Some(path) = config.history_path() {
            assert!(path.ends_with("moodscribe/history.txt"));
        }
    }
}
