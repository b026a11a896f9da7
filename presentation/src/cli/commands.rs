//! CLI command definitions

use clap::{Parser, ValueEnum};
use moodscribe_domain::{ExamplePrompt, OutputFormat};
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Sentiment badge and framed generated text
    Full,
    /// Only the cleaned generated text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for moodscribe
#[derive(Parser, Debug)]
#[command(name = "moodscribe")]
#[command(author, version, about = "Sentiment-matched text generation")]
#[command(long_about = r#"
Moodscribe detects the sentiment of your prompt and writes a new paragraph
on the same topic in the same tone.

Each run has two model calls:
1. Sentiment: a classifier labels the prompt POSITIVE, NEGATIVE or NEUTRAL
2. Generation: a language model writes a paragraph in that tone

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./moodscribe.toml   Project-level config
3. ~/.config/moodscribe/config.toml   Global config

Example:
  moodscribe "I had an amazing vacation in the mountains!"
  moodscribe --example negative --output text
  moodscribe --interactive
"#)]
pub struct Cli {
    /// The prompt to analyze (omit to start interactive mode)
    pub prompt: Option<String>,

    /// Run one of the built-in example prompts
    #[arg(short, long, value_name = "positive|negative|neutral", conflicts_with = "prompt")]
    pub example: Option<ExamplePrompt>,

    /// Start the interactive prompt loop
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (defaults to the configured format, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Maximum length of the generated text, in tokens
    #[arg(long, value_name = "TOKENS")]
    pub max_length: Option<u32>,

    /// Print what this tool does and exit
    #[arg(long)]
    pub about: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to enter the interactive loop rather than run once
    pub fn wants_repl(&self) -> bool {
        self.interactive || (self.prompt.is_none() && self.example.is_none())
    }

    /// Prompt text for one-shot mode, if any
    pub fn one_shot_prompt(&self) -> Option<String> {
        self.example
            .map(|example| example.text().to_string())
            .or_else(|| self.prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_runs_once() {
        let cli = Cli::parse_from(["moodscribe", "Rainy days again"]);
        assert!(!cli.wants_repl());
        assert_eq!(cli.one_shot_prompt().as_deref(), Some("Rainy days again"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_no_prompt_starts_repl() {
        let cli = Cli::parse_from(["moodscribe"]);
        assert!(cli.wants_repl());
        assert!(cli.one_shot_prompt().is_none());
    }

    #[test]
    fn test_example_flag() {
        let cli = Cli::parse_from(["moodscribe", "--example", "neutral", "-o", "json"]);
        assert_eq!(cli.example, Some(ExamplePrompt::Neutral));
        assert_eq!(
            cli.one_shot_prompt().as_deref(),
            Some("The new library downtown is scheduled to open next Tuesday.")
        );
        assert_eq!(cli.output.map(OutputFormat::from), Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_example_rejected() {
        let err = Cli::try_parse_from(["moodscribe", "--example", "ecstatic"]).unwrap_err();
        assert!(err.to_string().contains("ecstatic"));
    }

    #[test]
    fn test_example_conflicts_with_prompt() {
        assert!(Cli::try_parse_from(["moodscribe", "hello", "--example", "positive"]).is_err());
    }

    #[test]
    fn test_verbosity_and_flags() {
        let cli = Cli::parse_from(["moodscribe", "-vv", "-q", "--no-color", "--no-config", "hi"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(cli.no_config);
    }
}
