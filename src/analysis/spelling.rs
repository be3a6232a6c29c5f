//! Dictionary based spell checking.
//!
//! The checker does not know any language. It splits the draft on
//! whitespace, normalizes every token and looks it up in a table of known
//! misspellings. Anything found there is reported as a [`FlaggedToken`]
//! carrying the exact byte offset of the token in the draft.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Characters removed from a token before it is looked up
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')', '?', '"', '\'',
];

const BUILTIN_ENTRIES: [(&str, &str); 14] = [
    ("teh", "the"),
    ("adn", "and"),
    ("wich", "which"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("occured", "occurred"),
    ("untill", "until"),
    ("becuase", "because"),
    ("beleive", "believe"),
    ("accomodate", "accommodate"),
    ("tommorow", "tomorrow"),
    ("wierd", "weird"),
    ("goverment", "government"),
];

/// Strip every punctuation character and lowercase what is left.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Split `text` on whitespace, yielding each token with its byte offset.
pub fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut start: Option<usize> = None;
    text.char_indices()
        .chain(std::iter::once((text.len(), ' ')))
        .filter_map(move |(i, c)| {
            if c.is_whitespace() {
                start.take().map(|s| (s, &text[s..i]))
            } else {
                if start.is_none() {
                    start = Some(i);
                }
                None
            }
        })
}

/// Static table from a misspelled word to its correction.
///
/// Keys are stored in their cleaned form (see [`clean_token`]) so lookups
/// are insensitive to case and punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Dictionary {
    /// Dictionary containing only the built-in misspellings
    pub fn builtin() -> Self {
        Self::empty().with_entries(BUILTIN_ENTRIES)
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add entries, normalizing their keys. Entries whose key cleans down to
    /// nothing are dropped.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, correction) in entries {
            let key = clean_token(key.as_ref());
            if key.is_empty() {
                tracing::warn!("Ignoring dictionary entry with an empty key");
                continue;
            }
            self.entries.insert(key, correction.into());
        }
        self
    }

    /// Correction for an already cleaned token
    pub fn lookup(&self, cleaned: &str) -> Option<&str> {
        self.entries.get(cleaned).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A misspelling found in the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedToken {
    /// The token as typed, with surrounding punctuation trimmed
    pub token: String,
    /// Byte offset of `token` in the checked text
    pub offset: usize,
    pub correction: String,
}

impl FlaggedToken {
    /// Byte range covered by the token
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.token.len()
    }

    /// Human readable suggestion line
    pub fn suggestion(&self) -> String {
        format!("\"{}\" should be \"{}\"", self.token, self.correction)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Flag every token of `text` whose cleaned form is a dictionary key,
    /// in document order.
    pub fn check(&self, text: &str) -> Vec<FlaggedToken> {
        tokens(text)
            .filter_map(|(offset, raw)| {
                let correction = self.dictionary.lookup(&clean_token(raw))?;
                let trimmed = raw.trim_start_matches(PUNCTUATION);
                let lead = raw.len() - trimmed.len();
                let token = trimmed.trim_end_matches(PUNCTUATION);

                Some(FlaggedToken {
                    token: token.to_string(),
                    offset: offset + lead,
                    correction: correction.to_string(),
                })
            })
            .collect()
    }
}

/// Suggestion lines parallel to `flags`
pub fn suggestions(flags: &[FlaggedToken]) -> Vec<String> {
    flags.iter().map(FlaggedToken::suggestion).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_byte_offsets() {
        let found: Vec<_> = tokens("  one\ttwo\n\nthree ").collect();
        assert_eq!(found, vec![(2, "one"), (6, "two"), (11, "three")]);
    }

    #[test]
    fn tokens_of_blank_text() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens(" \n ").count(), 0);
    }

    #[test]
    fn clean_token_strips_everywhere() {
        assert_eq!(clean_token("(Teh!)"), "teh");
        assert_eq!(clean_token("t-e-h"), "teh");
        assert_eq!(clean_token("?!"), "");
    }

    #[test]
    fn flags_trimmed_token_and_offset() {
        let checker = SpellChecker::default();
        let flags = checker.check("I said \"Teh,\" twice");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].token, "Teh");
        assert_eq!(flags[0].offset, 8);
        assert_eq!(flags[0].correction, "the");
        assert_eq!(flags[0].suggestion(), "\"Teh\" should be \"the\"");
    }

    #[test]
    fn repeated_tokens_get_their_own_offsets() {
        let checker = SpellChecker::default();
        let text = "teh  cat and teh dog";
        let offsets: Vec<usize> = checker.check(text).iter().map(|f| f.offset).collect();

        assert_eq!(offsets, vec![0, 13]);
        for flag in checker.check(text) {
            assert_eq!(&text[flag.span()], "teh");
        }
    }

    #[test]
    fn offsets_after_multibyte_text() {
        let checker = SpellChecker::default();
        let text = "café wierd";
        let flags = checker.check(text);
        assert_eq!(flags.len(), 1);
        assert_eq!(&text[flags[0].span()], "wierd");
    }

    #[test]
    fn extra_entries_are_normalized() {
        let dictionary = Dictionary::builtin().with_entries([("Thier!", "their"), ("--", "x")]);
        let checker = SpellChecker::new(dictionary);

        assert_eq!(checker.check("thier house")[0].correction, "their");
        assert_eq!(checker.dictionary().len(), BUILTIN_ENTRIES.len() + 1);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn check_is_idempotent(text in "[a-zA-Z .,!teh]{0,64}") {
                let checker = SpellChecker::default();
                prop_assert_eq!(checker.check(&text), checker.check(&text));
            }

            #[test]
            fn spans_point_at_flagged_text(text in "(teh|the|wich|cat|,|\\.| |\n){0,24}") {
                let checker = SpellChecker::default();
                for flag in checker.check(&text) {
                    prop_assert_eq!(&text[flag.span()], flag.token.as_str());
                    prop_assert_eq!(
                        checker.dictionary().lookup(&clean_token(&flag.token)),
                        Some(flag.correction.as_str())
                    );
                }
            }
        }
    }
}
