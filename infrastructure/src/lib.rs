//! Infrastructure layer for moodscribe
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod huggingface;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileHuggingFaceConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileProvidersConfig, FileReplConfig,
};
pub use huggingface::{
    HuggingFaceClient, HuggingFaceError, HuggingFaceSentimentClassifier, HuggingFaceTextGenerator,
};
pub use logging::JsonlConversationLogger;
