//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod inference;
pub mod progress;
pub mod sentiment_classifier;
pub mod text_generator;
