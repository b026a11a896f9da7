//! Progress reporting for generation runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use moodscribe_application::ports::progress::GenerationProgressNotifier;
use moodscribe_domain::{GenerationPrompt, GenerationResult, Sentiment};
use std::sync::Mutex;
use std::time::Duration;

const THINKING: u64 = 10;
const DETECTED: u64 = 50;
const GENERATING: u64 = 60;
const DONE: u64 = 100;

/// Reports progress with a single percentage bar on stderr
///
/// The bar is created when a run starts, so one reporter can be reused
/// across the runs of an interactive session.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {percent:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgressNotifier for ProgressReporter {
    fn on_classification_start(&self) {
        let pb = ProgressBar::new(DONE);
        pb.set_style(Self::bar_style());
        pb.set_position(THINKING);
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_sentiment_detected(&self, sentiment: &Sentiment) {
        self.with_bar(|pb| {
            pb.set_position(DETECTED);
            pb.set_message(format!("Sentiment Detected: {}", sentiment.label));
        });
    }

    fn on_generation_start(&self, _prompt: &GenerationPrompt) {
        self.with_bar(|pb| {
            pb.set_position(GENERATING);
            pb.set_message("Generating...");
        });
    }

    fn on_generation_complete(&self, _result: &GenerationResult) {
        if let Some(pb) = self.take_bar() {
            pb.set_position(DONE);
            pb.finish_with_message(format!("{}", "Generation Complete!".green()));
        }
    }

    fn on_failed(&self, message: &str) {
        if let Some(pb) = self.take_bar() {
            pb.abandon_with_message(format!("{} {}", "x".red(), message));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl GenerationProgressNotifier for SimpleProgress {
    fn on_classification_start(&self) {
        eprintln!("{} {}", "->".cyan(), "Thinking...".bold());
    }

    fn on_sentiment_detected(&self, sentiment: &Sentiment) {
        eprintln!(
            "  {} Sentiment Detected: {} ({}%)",
            "v".green(),
            sentiment.label,
            sentiment.confidence_percent()
        );
    }

    fn on_generation_start(&self, _prompt: &GenerationPrompt) {
        eprintln!("{} {}", "->".cyan(), "Generating...".bold());
    }

    fn on_generation_complete(&self, _result: &GenerationResult) {
        eprintln!("  {} Generation Complete!", "v".green());
    }

    fn on_failed(&self, message: &str) {
        eprintln!("  {} {}", "x".red(), message);
    }
}
