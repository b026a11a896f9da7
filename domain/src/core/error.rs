//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid sentiment score: {0}")]
    InvalidScore(f32),

    #[error("Invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown example prompt: {0}")]
    UnknownExample(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_display() {
        assert_eq!(DomainError::EmptyPrompt.to_string(), "Prompt cannot be empty");
    }
}
