//! Console output formatter for generation results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use moodscribe_domain::{ExamplePrompt, GenerationResult, SentimentLabel};

const FRAME_WIDTH: usize = 72;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Generated Result"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Prompt:".cyan().bold(), result.prompt));

        output.push_str(&format!(
            "{}  {}\n",
            Self::badge(result.label()),
            format!("{}% confidence", result.sentiment.confidence_percent()).dimmed()
        ));
        if result.sentiment.is_fallback() {
            output.push_str(&format!(
                "{} classifier answered '{}'\n",
                "note:".yellow(),
                result.sentiment.raw_label
            ));
        }
        output.push('\n');

        output.push_str(&Self::framed(&result.cleaned_text));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &GenerationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the generated text only
    pub fn format_text_only(result: &GenerationResult) -> String {
        result.cleaned_text.clone()
    }

    /// Coloured sentiment badge with its emoji
    pub fn badge(label: SentimentLabel) -> ColoredString {
        let text = format!(" Detected Sentiment: {} {} ", label, Self::emoji(label));
        match label {
            SentimentLabel::Positive => text.black().on_green().bold(),
            SentimentLabel::Negative => text.white().on_red().bold(),
            SentimentLabel::Neutral => text.white().on_blue().bold(),
        }
    }

    pub fn emoji(label: SentimentLabel) -> &'static str {
        match label {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😠",
            SentimentLabel::Neutral => "😐",
        }
    }

    /// Warning for user mistakes such as an empty prompt
    pub fn warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    /// Error line for failed runs
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// What the tool does and what it is built on
    pub fn about(classifier_model: &str, generator_model: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("About moodscribe"));
        output.push('\n');
        output.push_str(
            "Moodscribe analyzes the sentiment of your prompt and generates a new\n\
             paragraph on the same topic that carries the same tone.\n\n",
        );
        output.push_str(&format!("{}\n", "How it works:".cyan().bold()));
        output.push_str("  1. A sentiment classifier labels your prompt\n");
        output.push_str("  2. The label is woven into a generation prompt\n");
        output.push_str("  3. A language model writes the paragraph\n\n");
        output.push_str(&format!("{}\n", "Models:".cyan().bold()));
        output.push_str(&format!("  Sentiment:  {}\n", classifier_model));
        output.push_str(&format!("  Generation: {}\n\n", generator_model));
        output.push_str(&format!("{}\n", "Built with:".cyan().bold()));
        output.push_str("  Hugging Face Inference API, tokio, reqwest, clap, reedline\n");
        output.push_str(&Self::footer());
        output
    }

    /// Built-in example prompts, one per line
    pub fn examples() -> String {
        let mut output = format!("{}\n", "Example prompts:".cyan().bold());
        for example in ExamplePrompt::all() {
            output.push_str(&format!(
                "  {:<9} {} {}\n",
                example.name().bold(),
                Self::emoji(example.expected_sentiment()),
                example.text()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(FRAME_WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = FRAME_WIDTH
        )
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(FRAME_WIDTH).cyan())
    }

    /// Wrap `text` to the frame width and draw a left rule beside it
    fn framed(text: &str) -> String {
        let rule = "│".cyan();
        let mut output = String::new();
        for line in wrap(text, FRAME_WIDTH - 4) {
            output.push_str(&format!("{} {}\n", rule, line));
        }
        output.push('\n');
        output
    }
}

/// Greedy word wrap that keeps paragraph breaks
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &GenerationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &GenerationResult) -> String {
        Self::format_json(result)
    }

    fn format_text_only(&self, result: &GenerationResult) -> String {
        Self::format_text_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscribe_domain::{OutputFormat, PromptTemplate, Sentiment, UserPrompt};

    fn result(raw_label: &str, cleaned: &str) -> GenerationResult {
        let prompt = UserPrompt::new("Rainy days again").unwrap();
        let sentiment = Sentiment::from_model_output(raw_label, 0.97).unwrap();
        let generation_prompt = PromptTemplate::generation(sentiment.label, &prompt);
        GenerationResult {
            generated_text: format!("{} {}", generation_prompt, cleaned),
            prompt,
            sentiment,
            generation_prompt,
            cleaned_text: cleaned.to_string(),
        }
    }

    #[test]
    fn test_badge_per_label() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::badge(SentimentLabel::Positive).to_string(),
            " Detected Sentiment: POSITIVE 😊 "
        );
        assert_eq!(
            ConsoleFormatter::badge(SentimentLabel::Negative).to_string(),
            " Detected Sentiment: NEGATIVE 😠 "
        );
        assert_eq!(
            ConsoleFormatter::badge(SentimentLabel::Neutral).to_string(),
            " Detected Sentiment: NEUTRAL 😐 "
        );
    }

    #[test]
    fn test_full_format_contains_badge_and_text() {
        let output = ConsoleFormatter::format(&result("NEGATIVE", "Clouds rolled in."));
        assert!(output.contains("NEGATIVE"));
        assert!(output.contains("97% confidence"));
        assert!(output.contains("Clouds rolled in."));
        assert!(output.contains("Rainy days again"));
    }

    #[test]
    fn test_full_format_notes_fallback_label() {
        let output = ConsoleFormatter::format(&result("MIXED", "Hard to say."));
        assert!(output.contains("NEUTRAL"));
        assert!(output.contains("'MIXED'"));
    }

    #[test]
    fn test_text_only_is_cleaned_text() {
        let r = result("POSITIVE", "Sunshine everywhere.");
        assert_eq!(ConsoleFormatter::format_text_only(&r), "Sunshine everywhere.");
        assert_eq!(
            ConsoleFormatter.render(&r, OutputFormat::Text),
            "Sunshine everywhere."
        );
    }

    #[test]
    fn test_json_format_round_trips() {
        let r = result("POSITIVE", "Sunshine everywhere.");
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter.render(&r, OutputFormat::Json)).unwrap();
        assert_eq!(json["sentiment"]["label"], "POSITIVE");
        assert_eq!(json["cleaned_text"], "Sunshine everywhere.");
        assert_eq!(json["prompt"], "Rainy days again");
    }

    #[test]
    fn test_examples_lists_all_three() {
        let output = ConsoleFormatter::examples();
        for example in ExamplePrompt::all() {
            assert!(output.contains(example.text()));
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap("first\n\nsecond", 20), vec!["first", "", "second"]);
        assert_eq!(wrap("", 20), vec![""]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }
}
