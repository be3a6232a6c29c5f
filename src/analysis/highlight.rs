//! Markup rendering of flagged spans.

use super::spelling::FlaggedToken;

/// Opening and closing marker wrapped around each flagged span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl Default for Marker<'_> {
    fn default() -> Self {
        Self {
            open: "<mark>",
            close: "</mark>",
        }
    }
}

/// Wrap every flagged span of `text` in `marker`.
///
/// Spans are inserted from the highest offset down so that an insertion
/// never shifts a span that has not been processed yet. Spans that do not
/// fit the text, or overlap a span already wrapped, are left alone.
pub fn highlight_markup(text: &str, flags: &[FlaggedToken], marker: Marker<'_>) -> String {
    let mut ordered: Vec<&FlaggedToken> = flags.iter().collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut out = text.to_string();
    let mut floor = text.len() + 1;

    for flag in ordered {
        let span = flag.span();
        if span.end > text.len()
            || span.end > floor
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            tracing::debug!(offset = flag.offset, token = %flag.token, "skipping stale span");
            continue;
        }

        out.insert_str(span.end, marker.close);
        out.insert_str(span.start, marker.open);
        floor = span.start;
    }

    out
}

/// Convert a byte offset into a `(row, col)` position, with `col` counted
/// in characters. Offsets past the end clamp to the end of the text.
pub fn offset_to_position(text: &str, offset: usize) -> (usize, usize) {
    let mut row = 0;
    let mut col = 0;
    for (i, c) in text.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}
