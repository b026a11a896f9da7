//! Sentiment label value object

use serde::{Deserialize, Serialize};

/// Emotional polarity of a piece of text (Value Object)
///
/// Classifiers differ in their native vocabulary (`POSITIVE`, `pos`,
/// `LABEL_2`, ...). Every native label maps onto exactly one of these
/// variants; anything unrecognised lands on [`SentimentLabel::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Map a classifier's native label onto the fixed vocabulary.
    ///
    /// Matching is case-insensitive. `LABEL_0`/`LABEL_1`/`LABEL_2` follow the
    /// negative/neutral/positive ordering used by three-way sentiment heads.
    pub fn from_model_label(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or_default()
    }

    /// Like [`from_model_label`](Self::from_model_label), but returns `None`
    /// instead of falling back, so callers can report the fallback.
    pub fn recognize(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "label_2" => Some(Self::Positive),
            "negative" | "neg" | "label_0" => Some(Self::Negative),
            "neutral" | "neu" | "label_1" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Uppercase label for display (`POSITIVE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Lowercase word interpolated into the generation prompt (`positive`)
    pub fn prompt_word(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
