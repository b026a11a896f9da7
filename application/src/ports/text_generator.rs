//! Text generator port
//!
//! Defines the interface for causal text generation.

use super::inference::InferenceError;
use async_trait::async_trait;
use moodscribe_domain::GenerationParams;

/// Causal language model extending a prompt
///
/// Each returned string usually starts with the prompt itself. That echo is
/// a property of the model, not something implementations must guarantee.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the underlying model, for logs and display
    fn model_id(&self) -> &str;

    /// Generate `params.num_sequences` continuations of `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<String>, InferenceError>;
}
