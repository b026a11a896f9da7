//! Presentation layer for moodscribe
//!
//! This crate contains the CLI definition, output formatting,
//! progress reporting, and the interactive prompt loop.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;
pub mod runner;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::{PromptRepl, ReplAction};
pub use runner::{ProgressMode, run_prompt};
