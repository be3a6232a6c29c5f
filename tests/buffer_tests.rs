//! Integration tests for the draft buffer

use penmate::buffer::{Buffer, CursorMovement};

fn type_text(buffer: &mut Buffer, text: &str) {
    for ch in text.chars() {
        if ch == '\n' {
            buffer.insert_newline();
        } else {
            buffer.insert_char(ch);
        }
    }
}

#[test]
fn test_new_buffer_is_empty() {
    let buffer = Buffer::new();

    assert!(buffer.is_empty());
    assert!(!buffer.modified);
    assert_eq!(buffer.content, vec![String::new()]);
    assert_eq!(buffer.char_count(), 0);
    assert_eq!(buffer.word_count(), 0);
}

#[test]
fn test_typing_and_line_breaks() {
    let mut buffer = Buffer::new();
    type_text(&mut buffer, "Hello\nWorld");

    assert_eq!(buffer.content, vec!["Hello", "World"]);
    assert_eq!(buffer.content_as_string(), "Hello\nWorld");
    assert_eq!(buffer.cursor_pos, (1, 5));
    assert_eq!(buffer.char_count(), 11);
    assert_eq!(buffer.word_count(), 2);
    assert!(buffer.modified);
}

#[test]
fn test_split_line_in_the_middle() {
    let mut buffer = Buffer::from_text("HelloWorld");
    buffer.set_cursor(0, 5);
    buffer.insert_newline();

    assert_eq!(buffer.content, vec!["Hello", "World"]);
    assert_eq!(buffer.cursor_pos, (1, 0));
}

#[test]
fn test_backspace_joins_lines() {
    let mut buffer = Buffer::from_text("one\ntwo");
    buffer.set_cursor(1, 0);
    buffer.backspace();

    assert_eq!(buffer.content, vec!["onetwo"]);
    assert_eq!(buffer.cursor_pos, (0, 3));

    // Nothing before the start of the draft
    let mut buffer = Buffer::from_text("x");
    buffer.backspace();
    assert_eq!(buffer.content_as_string(), "x");
    assert!(!buffer.modified);
}

#[test]
fn test_delete_joins_lines() {
    let mut buffer = Buffer::from_text("one\ntwo");
    buffer.set_cursor(0, 3);
    buffer.delete();

    assert_eq!(buffer.content, vec!["onetwo"]);
    assert_eq!(buffer.cursor_pos, (0, 3));

    buffer.move_cursor(CursorMovement::BufferEnd);
    buffer.delete();
    assert_eq!(buffer.content_as_string(), "onetwo");
}

#[test]
fn test_multibyte_editing() {
    let mut buffer = Buffer::new();
    type_text(&mut buffer, "naïve café");

    assert_eq!(buffer.cursor_pos, (0, 10));
    assert_eq!(buffer.char_count(), 10);

    buffer.move_cursor(CursorMovement::Left);
    buffer.backspace();
    assert_eq!(buffer.content_as_string(), "naïve caé");

    buffer.set_cursor(0, 2);
    buffer.delete();
    assert_eq!(buffer.content_as_string(), "nave caé");
}

#[test]
fn test_cursor_movement_wraps_lines() {
    let mut buffer = Buffer::from_text("ab\ncd");

    buffer.set_cursor(0, 2);
    buffer.move_cursor(CursorMovement::Right);
    assert_eq!(buffer.cursor_pos, (1, 0));

    buffer.move_cursor(CursorMovement::Left);
    assert_eq!(buffer.cursor_pos, (0, 2));

    buffer.move_cursor(CursorMovement::LineStart);
    assert_eq!(buffer.cursor_pos, (0, 0));
    buffer.move_cursor(CursorMovement::Up);
    assert_eq!(buffer.cursor_pos, (0, 0));

    buffer.move_cursor(CursorMovement::BufferEnd);
    assert_eq!(buffer.cursor_pos, (1, 2));
    buffer.move_cursor(CursorMovement::BufferStart);
    assert_eq!(buffer.cursor_pos, (0, 0));
}

#[test]
fn test_vertical_movement_clamps_column() {
    let mut buffer = Buffer::from_text("a long line\nshort\n");
    buffer.set_cursor(0, 11);

    buffer.move_cursor(CursorMovement::Down);
    assert_eq!(buffer.cursor_pos, (1, 5));
    buffer.move_cursor(CursorMovement::Down);
    assert_eq!(buffer.cursor_pos, (2, 0));
}

#[test]
fn test_page_movement() {
    let text = vec!["x"; 20].join("\n");
    let mut buffer = Buffer::from_text(&text);

    buffer.move_cursor(CursorMovement::PageDown);
    assert_eq!(buffer.cursor_pos.0, 8);
    buffer.move_cursor(CursorMovement::PageDown);
    buffer.move_cursor(CursorMovement::PageDown);
    assert_eq!(buffer.cursor_pos.0, 19);
    buffer.move_cursor(CursorMovement::PageUp);
    assert_eq!(buffer.cursor_pos.0, 11);
}

#[test]
fn test_set_content_clamps_cursor() {
    let mut buffer = Buffer::from_text("first\nsecond line");
    buffer.set_cursor(1, 11);

    buffer.set_content("short");

    assert_eq!(buffer.content, vec!["short"]);
    assert_eq!(buffer.cursor_pos, (0, 5));
    assert!(buffer.modified);
}

#[test]
fn test_set_cursor_clamps() {
    let mut buffer = Buffer::from_text("abc");
    buffer.set_cursor(5, 9);
    assert_eq!(buffer.cursor_pos, (0, 3));
}

#[test]
fn test_line_number_width() {
    assert_eq!(Buffer::count_digits(0), 1);
    assert_eq!(Buffer::count_digits(9), 1);
    assert_eq!(Buffer::count_digits(1234), 4);

    let buffer = Buffer::from_text("one");
    assert_eq!(buffer.line_number_width(), 4);

    let text = vec!["x"; 1200].join("\n");
    let buffer = Buffer::from_text(&text);
    assert_eq!(buffer.line_number_width(), 5);
}
