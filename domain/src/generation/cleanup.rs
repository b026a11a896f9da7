//! Removal of the echoed generation prompt

/// Strip the echoed prompt from a causal generator's raw output.
///
/// Removes the first literal occurrence of `prompt` and trims surrounding
/// whitespace. When the generator did not echo the prompt verbatim
/// (truncation, tokenizer round-trip differences) the text is only trimmed.
pub fn strip_echoed_prompt(generated: &str, prompt: &str) -> String {
    if prompt.is_empty() {
        return generated.trim().to_string();
    }
    generated.replacen(prompt, "", 1).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "Write a positive paragraph about the following topic: Sunshine";

    #[test]
    fn test_exact_prefix_removed() {
        let generated = format!("{PROMPT} It was wonderful.");
        assert_eq!(strip_echoed_prompt(&generated, PROMPT), "It was wonderful.");
    }

    #[test]
    fn test_trim_is_idempotent() {
        let generated = format!("{PROMPT}\n\n  It was wonderful.  \n");
        let cleaned = strip_echoed_prompt(&generated, PROMPT);
        assert_eq!(cleaned, "It was wonderful.");
        assert_eq!(cleaned.trim(), cleaned);
    }

    #[test]
    fn test_missing_prompt_is_noop() {
        let generated = "A bright morning greeted the town.";
        assert_eq!(strip_echoed_prompt(generated, PROMPT), generated);
    }

    #[test]
    fn test_near_duplicate_prompt_kept() {
        // Tokenizer round-trips can alter spacing; no fuzzy matching is done.
        let generated = format!("{}  It was wonderful.", PROMPT.replace(": ", " : "));
        assert_eq!(strip_echoed_prompt(&generated, PROMPT), generated.trim());
    }

    #[test]
    fn test_only_first_occurrence_removed() {
        let generated = format!("{PROMPT} and again {PROMPT}");
        assert_eq!(
            strip_echoed_prompt(&generated, PROMPT),
            format!("and again {PROMPT}")
        );
    }

    #[test]
    fn test_output_equal_to_prompt_is_empty() {
        assert_eq!(strip_echoed_prompt(PROMPT, PROMPT), "");
    }
}
