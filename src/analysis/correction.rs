//! Applying a correction to the whole draft.

use regex::RegexBuilder;

use super::spelling::PUNCTUATION;

/// Result of replacing a token throughout a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub text: String,
    pub replaced: usize,
}

/// Characters that may sit next to a token without joining it, matching
/// how the spell checker splits and cleans tokens
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

/// Replace every case-insensitive, whole-word occurrence of `original` in
/// `text` with `replacement`.
///
/// An occurrence counts as a whole word when each neighbouring character is
/// whitespace or punctuation, or the edge of the text. Correcting `teh`
/// rewrites `'teh'` and `(teh)` but leaves `tehran` untouched.
pub fn replace_all(text: &str, original: &str, replacement: &str) -> Correction {
    if original.is_empty() {
        return Correction {
            text: text.to_string(),
            replaced: 0,
        };
    }

    let pattern = match RegexBuilder::new(&regex::escape(original))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            // An escaped literal only fails to compile when it exceeds the size limit
            tracing::error!("Could not build correction pattern for {original:?}: {e}");
            return Correction {
                text: text.to_string(),
                replaced: 0,
            };
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = 0;

    for found in pattern.find_iter(text) {
        let before = text[..found.start()].chars().next_back();
        let after = text[found.end()..].chars().next();
        if !before.map_or(true, is_boundary) || !after.map_or(true, is_boundary) {
            continue;
        }

        out.push_str(&text[last..found.start()]);
        out.push_str(replacement);
        last = found.end();
        replaced += 1;
    }
    out.push_str(&text[last..]);

    Correction {
        text: out,
        replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let result = replace_all("teh teh", "teh", "the");
        assert_eq!(result.text, "the the");
        assert_eq!(result.replaced, 2);
    }

    #[test]
    fn matches_case_insensitively() {
        let result = replace_all("Teh cat. TEH dog, teh.", "teh", "the");
        assert_eq!(result.text, "the cat. the dog, the.");
        assert_eq!(result.replaced, 3);
    }

    #[test]
    fn leaves_longer_words_alone() {
        let result = replace_all("tehran teh", "teh", "the");
        assert_eq!(result.text, "tehran the");
        assert_eq!(result.replaced, 1);
    }

    #[test]
    fn quoted_and_bracketed_tokens_are_replaced() {
        let result = replace_all("she wrote 'teh' and (Teh) and \"teh\"", "teh", "the");
        assert_eq!(result.text, "she wrote 'the' and (the) and \"the\"");
        assert_eq!(result.replaced, 3);
    }

    #[test]
    fn symbols_outside_the_punctuation_set_join_the_word() {
        let result = replace_all("teh\u{a9} teh", "teh", "the");
        assert_eq!(result.text, "teh\u{a9} the");
        assert_eq!(result.replaced, 1);
    }

    #[test]
    fn regex_characters_are_literal() {
        let result = replace_all("a.b axb", "a.b", "ab");
        assert_eq!(result.text, "ab axb");
    }

    #[test]
    fn nothing_to_replace() {
        let result = replace_all("all good", "teh", "the");
        assert_eq!(result.text, "all good");
        assert_eq!(result.replaced, 0);
        assert_eq!(replace_all("x", "", "y").replaced, 0);
    }
}
