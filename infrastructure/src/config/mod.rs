//! Configuration file loading for moodscribe
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MOODSCRIBE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./moodscribe.toml` or `./.moodscribe.toml`
//! 4. Global: `$XDG_CONFIG_HOME/moodscribe/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileHuggingFaceConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
