//! Output formatter trait

use moodscribe_domain::{GenerationResult, OutputFormat};

/// Trait for formatting generation results
pub trait OutputFormatter {
    /// Format the complete result with the sentiment badge
    fn format(&self, result: &GenerationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &GenerationResult) -> String;

    /// Format the generated text only (concise output)
    fn format_text_only(&self, result: &GenerationResult) -> String;

    /// Format in the requested style
    fn render(&self, result: &GenerationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Text => self.format_text_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
