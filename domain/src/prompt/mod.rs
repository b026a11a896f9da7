//! Prompt domain
//!
//! The generation template and the built-in example prompts.

mod examples;
mod template;

pub use examples::ExamplePrompt;
pub use template::{GenerationPrompt, PromptTemplate};
