//! # Writing Analysis
//!
//! Pure derivations over the draft text:
//!
//! - tone classification from keyword membership
//! - dictionary based spell checking with exact byte offsets
//! - markup highlighting of flagged spans
//! - whole-draft correction of a flagged token
//!
//! Nothing in here keeps state between calls. [`WritingAssistant`] bundles
//! the classifier and checker built at startup and produces an [`Analysis`]
//! snapshot for a given text.

pub mod correction;
pub mod highlight;
pub mod spelling;
pub mod tone;

pub use correction::{replace_all, Correction};
pub use highlight::{highlight_markup, offset_to_position, Marker};
pub use spelling::{clean_token, suggestions, Dictionary, FlaggedToken, SpellChecker};
pub use tone::{Tone, ToneClassifier};

use crate::config::AssistantConfig;

/// Everything derived from one version of the draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub tone: Tone,
    pub flags: Vec<FlaggedToken>,
    /// Suggestion lines, parallel to `flags`
    pub suggestions: Vec<String>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WritingAssistant {
    tone: ToneClassifier,
    speller: SpellChecker,
}

impl WritingAssistant {
    pub fn new(tone: ToneClassifier, speller: SpellChecker) -> Self {
        Self { tone, speller }
    }

    /// Build the assistant from the built-in tables plus configured extras
    pub fn from_config(config: &AssistantConfig) -> Self {
        let dictionary = Dictionary::builtin().with_entries(
            config
                .dictionary
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone())),
        );
        let tone = ToneClassifier::new()
            .with_extra_words(&config.positive_words, &config.negative_words);

        tracing::debug!(entries = dictionary.len(), "writing assistant ready");
        Self::new(tone, SpellChecker::new(dictionary))
    }

    pub fn classify_tone(&self, text: &str) -> Tone {
        self.tone.classify(text)
    }

    pub fn check_spelling(&self, text: &str) -> Vec<FlaggedToken> {
        self.speller.check(text)
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.speller.dictionary()
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let flags = self.check_spelling(text);
        let suggestions = suggestions(&flags);
        Analysis {
            tone: self.classify_tone(text),
            flags,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_reference_sentence() {
        let analysis = WritingAssistant::default().analyze("teh cat is happy");

        assert_eq!(analysis.tone, Tone::Positive);
        assert_eq!(analysis.flags.len(), 1);
        assert_eq!(analysis.flags[0].token, "teh");
        assert_eq!(analysis.flags[0].correction, "the");
        assert_eq!(analysis.suggestions, vec!["\"teh\" should be \"the\""]);
    }

    #[test]
    fn analyze_plain_text() {
        let analysis = WritingAssistant::default().analyze("the cat sat on the mat");
        assert!(analysis.is_clean());
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.tone, Tone::Neutral);
    }

    #[test]
    fn config_extends_tables() {
        let mut config = AssistantConfig::default();
        config.dictionary.insert("Gud".into(), "good".into());
        config.negative_words.push("gloomy".into());

        let assistant = WritingAssistant::from_config(&config);
        let analysis = assistant.analyze("a gloomy but gud day");
        assert_eq!(analysis.tone, Tone::Negative);
        assert_eq!(analysis.flags[0].correction, "good");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn analysis_is_deterministic(text in "\\PC{0,80}") {
                let assistant = WritingAssistant::default();
                let first = assistant.analyze(&text);
                prop_assert_eq!(first.suggestions.len(), first.flags.len());
                prop_assert_eq!(first, assistant.analyze(&text));
            }

            #[test]
            fn tone_is_one_of_three(words in proptest::collection::vec("[a-z]{1,9}|happy|sad|upset", 0..12)) {
                let text = words.join(" ");
                let tone = WritingAssistant::default().classify_tone(&text);
                prop_assert!(matches!(tone, Tone::Positive | Tone::Negative | Tone::Neutral));
            }
        }
    }
}
