//! Keyword based tone classification.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 3] = ["happy", "excited", "wonderful"];
const NEGATIVE_WORDS: [&str; 3] = ["sad", "angry", "upset"];

/// Coarse sentiment of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    /// Lowercase label, as shown in logs and config
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }

    /// Capitalized label used by the tone badge
    pub fn title(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Negative => "Negative",
            Tone::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies text by membership of its words in two fixed keyword sets.
///
/// Positive keywords are checked first, then negative ones; text matching
/// neither is neutral.
#[derive(Debug, Clone)]
pub struct ToneClassifier {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ToneClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extra keywords on top of the built-in lists
    pub fn with_extra_words<P, N>(mut self, positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        self.positive
            .extend(positive.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.negative
            .extend(negative.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.positive.remove("");
        self.negative.remove("");
        self
    }

    pub fn classify(&self, text: &str) -> Tone {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        if words.iter().any(|w| self.positive.contains(w)) {
            Tone::Positive
        } else if words.iter().any(|w| self.negative.contains(w)) {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}
