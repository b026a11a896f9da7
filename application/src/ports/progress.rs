//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation run.

use moodscribe_domain::{GenerationPrompt, GenerationResult, Sentiment};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait GenerationProgressNotifier: Send + Sync {
    /// Called before the classifier is invoked
    fn on_classification_start(&self) {}

    /// Called once the sentiment is known
    fn on_sentiment_detected(&self, _sentiment: &Sentiment) {}

    /// Called before the generator is invoked
    fn on_generation_start(&self, _prompt: &GenerationPrompt) {}

    /// Called after cleanup, right before the result is returned
    fn on_generation_complete(&self, _result: &GenerationResult) {}

    /// Called when the run stops with an error
    fn on_failed(&self, _message: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgressNotifier for NoProgress {}
