//! Running one prompt with the chosen progress display

use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use moodscribe_application::{
    NoProgress, RunGenerationError, RunGenerationInput, RunGenerationUseCase,
};
use moodscribe_domain::GenerationResult;
use std::io::IsTerminal;

/// How progress is shown while a run is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Animated bar on stderr
    Bar,
    /// One line per stage on stderr
    Simple,
    Hidden,
}

impl ProgressMode {
    /// Bar on a terminal, plain lines when stderr is redirected
    pub fn detect(show_progress: bool) -> Self {
        if !show_progress {
            ProgressMode::Hidden
        } else if std::io::stderr().is_terminal() {
            ProgressMode::Bar
        } else {
            ProgressMode::Simple
        }
    }
}

/// Execute one run, reporting progress according to `mode`
pub async fn run_prompt(
    use_case: &RunGenerationUseCase,
    input: RunGenerationInput,
    mode: ProgressMode,
) -> Result<GenerationResult, RunGenerationError> {
    match mode {
        ProgressMode::Bar => {
            let progress = ProgressReporter::new();
            use_case.execute(input, &progress).await
        }
        ProgressMode::Simple => use_case.execute(input, &SimpleProgress).await,
        ProgressMode::Hidden => use_case.execute(input, &NoProgress).await,
    }
}
