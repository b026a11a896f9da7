//! Parsing of REPL input lines

use moodscribe_domain::ExamplePrompt;

/// What a line typed at the REPL asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Run a generation on this prompt text
    Run(String),
    Help,
    ListExamples,
    Models,
    About,
    Quit,
    /// A command that could not be understood, with the message to show
    Invalid(String),
}

impl ReplAction {
    /// Interpret one input line.
    ///
    /// A blank line runs the placeholder prompt and a known `/command` runs
    /// that command. An unknown `/word` followed by more text is a prompt, so
    /// "/r/books made my day" still reaches the models. Prompts are passed
    /// through untrimmed.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplAction::Run(ExamplePrompt::PLACEHOLDER.to_string());
        }
        if !trimmed.starts_with('/') {
            return ReplAction::Run(line.to_string());
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match (command, argument) {
            ("/quit" | "/exit" | "/q", _) => ReplAction::Quit,
            ("/help" | "/h" | "/?", _) => ReplAction::Help,
            ("/examples", _) => ReplAction::ListExamples,
            ("/models", _) => ReplAction::Models,
            ("/about", _) => ReplAction::About,
            ("/example", Some(name)) => match name.parse::<ExamplePrompt>() {
                Ok(example) => ReplAction::Run(example.text().to_string()),
                Err(e) => ReplAction::Invalid(e.to_string()),
            },
            ("/example", None) => {
                ReplAction::Invalid("Usage: /example <positive|negative|neutral>".to_string())
            }
            (_, Some(_)) => ReplAction::Run(line.to_string()),
            (other, None) => ReplAction::Invalid(format!("Unknown command: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_runs_placeholder() {
        assert_eq!(
            ReplAction::parse("   "),
            ReplAction::Run("I had an amazing vacation in the mountains!".to_string())
        );
    }

    #[test]
    fn test_prompt_passed_through() {
        assert_eq!(
            ReplAction::parse("  Rainy days again "),
            ReplAction::Run("  Rainy days again ".to_string())
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(ReplAction::parse("/quit"), ReplAction::Quit);
        assert_eq!(ReplAction::parse("/q"), ReplAction::Quit);
        assert_eq!(ReplAction::parse("/help"), ReplAction::Help);
        assert_eq!(ReplAction::parse("/examples"), ReplAction::ListExamples);
        assert_eq!(ReplAction::parse("/models"), ReplAction::Models);
        assert_eq!(ReplAction::parse(" /about "), ReplAction::About);
    }

    #[test]
    fn test_example_command() {
        assert_eq!(
            ReplAction::parse("/example negative"),
            ReplAction::Run(
                "The constant rain and canceled plans have left me feeling gloomy and disappointed."
                    .to_string()
            )
        );
        assert_eq!(
            ReplAction::parse("/example ecstatic"),
            ReplAction::Invalid("Unknown example prompt: ecstatic".to_string())
        );
        assert!(matches!(ReplAction::parse("/example"), ReplAction::Invalid(_)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplAction::parse("/dance"),
            ReplAction::Invalid("Unknown command: /dance".to_string())
        );
    }

    #[test]
    fn test_slash_word_with_text_is_prompt() {
        assert_eq!(
            ReplAction::parse("/r/books made my day"),
            ReplAction::Run("/r/books made my day".to_string())
        );
        assert_eq!(
            ReplAction::parse("/dance like nobody is watching "),
            ReplAction::Run("/dance like nobody is watching ".to_string())
        );
        assert_eq!(
            ReplAction::parse("/r/books"),
            ReplAction::Invalid("Unknown command: /r/books".to_string())
        );
    }
}
