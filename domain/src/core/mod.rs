//! Core domain concepts shared across all subdomains.
//!
//! - [`user_prompt::UserPrompt`]: validated text supplied by the user
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod user_prompt;
