//! REPL (Read-Eval-Print Loop) for interactive generation

use super::action::ReplAction;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::runner::{ProgressMode, run_prompt};
use colored::Colorize;
use moodscribe_application::{RunGenerationInput, RunGenerationUseCase};
use moodscribe_domain::{ExamplePrompt, GenerationParams};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

/// Interactive prompt loop
pub struct PromptRepl {
    use_case: RunGenerationUseCase,
    params: GenerationParams,
    output: OutputConfig,
    config: ReplConfig,
}

impl PromptRepl {
    pub fn new(use_case: RunGenerationUseCase) -> Self {
        Self {
            use_case,
            params: GenerationParams::default(),
            output: OutputConfig::default(),
            config: ReplConfig::default(),
        }
    }

    /// Set the generation parameters used for every prompt
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(self.config.history_size, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled, could not open {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("moodscribe".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        println!(
                            "{}",
                            format!("(using: {})", ExamplePrompt::PLACEHOLDER).dimmed()
                        );
                    }
                    match ReplAction::parse(&line) {
                        ReplAction::Run(text) => self.process_prompt(text).await,
                        ReplAction::Quit => {
                            println!("Bye!");
                            break;
                        }
                        ReplAction::Help => Self::print_help(),
                        ReplAction::ListExamples => {
                            println!();
                            println!("{}", ConsoleFormatter::examples());
                        }
                        ReplAction::Models => self.print_models(),
                        ReplAction::About => println!(
                            "{}",
                            ConsoleFormatter::about(
                                self.use_case.classifier_model(),
                                self.use_case.generator_model()
                            )
                        ),
                        ReplAction::Invalid(message) => {
                            println!("{}", message);
                            println!("Type /help for available commands");
                        }
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Moodscribe - Interactive Mode        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a prompt and press Enter. An empty line uses:");
        println!("  {}", ExamplePrompt::PLACEHOLDER.italic());
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /examples          - List example prompts");
        println!("  /example <name>    - Run an example (positive, negative, neutral)");
        println!("  /models            - Show the models in use");
        println!("  /about             - About this tool");
        println!("  /quit, /exit, /q   - Exit");
        println!();
        println!("A prompt may start with '/' as long as more text follows the first word.");
        println!();
    }

    fn print_models(&self) {
        println!();
        println!("Sentiment:  {}", self.use_case.classifier_model());
        println!("Generation: {}", self.use_case.generator_model());
        println!();
    }

    async fn process_prompt(&self, text: String) {
        println!();

        let input = RunGenerationInput::new(text).with_params(self.params);
        let mode = ProgressMode::detect(self.config.show_progress);

        match run_prompt(&self.use_case, input, mode).await {
            Ok(result) => {
                println!("{}", ConsoleFormatter.render(&result, self.output.format));
            }
            Err(e) if e.is_user_error() => {
                println!("{}", ConsoleFormatter::warning(&e.to_string()));
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            }
        }
        println!();
    }
}
