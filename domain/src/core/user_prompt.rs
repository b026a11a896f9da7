//! User prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text entered by the user (Value Object)
///
/// Guaranteed non-empty. Content is kept verbatim, surrounding whitespace
/// included; a whitespace-only prompt is still a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserPrompt {
    content: String,
}

impl UserPrompt {
    /// Create a new prompt, rejecting empty input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self { content })
    }

    /// Try to create a new prompt, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::new(content).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl AsRef<str> for UserPrompt {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl TryFrom<String> for UserPrompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserPrompt::new(s)
    }
}

impl TryFrom<&str> for UserPrompt {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UserPrompt::new(s)
    }
}

impl From<UserPrompt> for String {
    fn from(p: UserPrompt) -> Self {
        p.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_creation() {
        let p = UserPrompt::new("I had an amazing vacation").unwrap();
        assert_eq!(p.as_str(), "I had an amazing vacation");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(UserPrompt::new(""), Err(DomainError::EmptyPrompt));
    }

    #[test]
    fn test_whitespace_only_prompt_accepted() {
        let p = UserPrompt::new("   ").unwrap();
        assert_eq!(p.as_str(), "   ");
        assert!(UserPrompt::new("\n\t").is_ok());
    }

    #[test]
    fn test_try_new() {
        assert!(UserPrompt::try_new("").is_none());
        assert!(UserPrompt::try_new("Rainy day").is_some());
    }

    #[test]
    fn test_content_kept_verbatim() {
        let p = UserPrompt::new("  padded  ").unwrap();
        assert_eq!(p.as_str(), "  padded  ");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: Result<UserPrompt, _> = serde_json::from_str("\"hello\"");
        assert!(ok.is_ok());
        let err: Result<UserPrompt, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
