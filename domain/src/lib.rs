//! Domain layer for moodscribe
//!
//! This crate contains the value objects and pure logic of the
//! sentiment-matched generation flow. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sentiment
//!
//! A [`Sentiment`] is what the classifier says about the user's text:
//! a [`SentimentLabel`] (always one of three variants), the model's native
//! label string, and a confidence score.
//!
//! ## Generation
//!
//! The detected sentiment is embedded into a fixed [`PromptTemplate`],
//! producing a [`GenerationPrompt`]. Causal generators echo that prompt
//! back, so [`strip_echoed_prompt`] removes it from the raw output.

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod sentiment;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, user_prompt::UserPrompt};
pub use generation::{
    cleanup::strip_echoed_prompt, params::GenerationParams, result::GenerationResult,
};
pub use prompt::{ExamplePrompt, GenerationPrompt, PromptTemplate};
pub use sentiment::{label::SentimentLabel, value_objects::Sentiment};
