//! # Draft Buffer
//!
//! The text the user is writing.
//!
//! ## What it does
//!
//! - Stores the draft as lines in memory
//! - Tracks the cursor position, with the column counted in characters
//! - Handles character insertion, deletion and line joins
//! - Replaces its whole content when a correction is applied
//!
//! The draft is never written to disk and has no undo history.

#[derive(Clone, Debug)]
pub struct Buffer {
    pub content: Vec<String>,
    pub modified: bool,
    pub cursor_pos: (usize, usize), // (row, column in chars)
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte index of the `col`-th character of `line`, clamped to its end
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            content: vec![String::new()],
            modified: false,
            cursor_pos: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_content(text);
        buffer.modified = false;
        buffer
    }

    /// Draft content joined with newlines
    pub fn content_as_string(&self) -> String {
        let total: usize = self.content.iter().map(|line| line.len() + 1).sum();
        let mut result = String::with_capacity(total.saturating_sub(1));

        for (i, line) in self.content.iter().enumerate() {
            if i > 0 {
                result.push('\n');
            }
            result.push_str(line);
        }

        result
    }

    /// Replace the whole draft, keeping the cursor as close as possible to
    /// where it was
    pub fn set_content(&mut self, text: &str) {
        self.content = text.split('\n').map(str::to_string).collect();
        let (row, col) = self.cursor_pos;
        let row = row.min(self.content.len() - 1);
        let col = col.min(char_len(&self.content[row]));
        self.cursor_pos = (row, col);
        self.modified = true;
    }

    pub fn is_empty(&self) -> bool {
        self.content.iter().all(String::is_empty)
    }

    /// Number of characters in the draft, newlines included
    pub fn char_count(&self) -> usize {
        self.content.iter().map(|l| char_len(l)).sum::<usize>() + self.content.len() - 1
    }

    pub fn word_count(&self) -> usize {
        self.content
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    pub fn insert_char(&mut self, c: char) {
        let (row, col) = self.cursor_pos;
        let line = &mut self.content[row];
        let at = byte_index(line, col);
        line.insert(at, c);
        self.cursor_pos.1 = col.min(char_len(line) - 1) + 1;
        self.modified = true;
    }

    pub fn insert_newline(&mut self) {
        let (row, col) = self.cursor_pos;
        let at = byte_index(&self.content[row], col);
        let rest = self.content[row].split_off(at);
        self.content.insert(row + 1, rest);
        self.cursor_pos = (row + 1, 0);
        self.modified = true;
    }

    pub fn backspace(&mut self) {
        let (row, col) = self.cursor_pos;
        if col > 0 {
            let line = &mut self.content[row];
            let at = byte_index(line, col - 1);
            line.remove(at);
            self.cursor_pos.1 -= 1;
        } else if row > 0 {
            // Join with previous line
            let current_line = self.content.remove(row);
            let prev_line = &mut self.content[row - 1];
            let new_cursor_col = char_len(prev_line);
            prev_line.push_str(&current_line);
            self.cursor_pos = (row - 1, new_cursor_col);
        } else {
            return;
        }
        self.modified = true;
    }

    pub fn delete(&mut self) {
        let (row, col) = self.cursor_pos;
        let line = &mut self.content[row];
        if col < char_len(line) {
            let at = byte_index(line, col);
            line.remove(at);
        } else if row + 1 < self.content.len() {
            // Join with next line
            let next_line = self.content.remove(row + 1);
            self.content[row].push_str(&next_line);
        } else {
            return;
        }
        self.modified = true;
    }

    /// Place the cursor, clamping to the draft
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.content.len() - 1);
        self.cursor_pos = (row, col.min(char_len(&self.content[row])));
    }

    pub fn move_cursor(&mut self, direction: CursorMovement) {
        let (mut row, mut col) = self.cursor_pos;
        let page_size = 8;

        match direction {
            CursorMovement::Up => {
                if row > 0 {
                    row -= 1;
                    col = col.min(char_len(&self.content[row]));
                }
            }
            CursorMovement::Down => {
                if row + 1 < self.content.len() {
                    row += 1;
                    col = col.min(char_len(&self.content[row]));
                }
            }
            CursorMovement::Left => {
                if col > 0 {
                    col -= 1;
                } else if row > 0 {
                    row -= 1;
                    col = char_len(&self.content[row]);
                }
            }
            CursorMovement::Right => {
                if col < char_len(&self.content[row]) {
                    col += 1;
                } else if row + 1 < self.content.len() {
                    row += 1;
                    col = 0;
                }
            }
            CursorMovement::LineStart => col = 0,
            CursorMovement::LineEnd => col = char_len(&self.content[row]),
            CursorMovement::PageUp => {
                row = row.saturating_sub(page_size);
                col = col.min(char_len(&self.content[row]));
            }
            CursorMovement::PageDown => {
                row = (row + page_size).min(self.content.len() - 1);
                col = col.min(char_len(&self.content[row]));
            }
            CursorMovement::BufferStart => {
                row = 0;
                col = 0;
            }
            CursorMovement::BufferEnd => {
                row = self.content.len() - 1;
                col = char_len(&self.content[row]);
            }
        }

        self.cursor_pos = (row, col);
    }

    /// Count the number of digits in a number
    pub fn count_digits(mut n: usize) -> usize {
        let mut digits = 1;
        while n >= 10 {
            digits += 1;
            n /= 10;
        }
        digits
    }

    /// Width of the line number gutter, spacing included. Reserves three
    /// digits so short drafts don't shift while typing.
    pub fn line_number_width(&self) -> usize {
        Self::count_digits(self.content.len().max(1)).max(3) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMovement {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    BufferStart,
    BufferEnd,
}
