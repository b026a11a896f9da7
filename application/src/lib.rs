//! Application layer for moodscribe
//!
//! This crate contains the use case and the port definitions it depends on.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    inference::InferenceError,
    progress::{GenerationProgressNotifier, NoProgress},
    sentiment_classifier::SentimentClassifier,
    text_generator::TextGenerator,
};
pub use use_cases::run_generation::{
    InferenceStage, RunGenerationError, RunGenerationInput, RunGenerationUseCase,
};
