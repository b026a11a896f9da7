//! Interactive prompt loop

pub mod action;
pub mod prompt_repl;

pub use action::ReplAction;
pub use prompt_repl::PromptRepl;
