use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::analysis::{offset_to_position, FlaggedToken};

/// Decoration drawn under misspelled words
pub fn misspelled_style() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .underline_color(Color::Red)
        .add_modifier(Modifier::UNDERLINED)
}

/// Overlay drawn on top of the [`Editor`](super::editor::Editor) area.
///
/// It never writes text: it only restyles the cells covered by flagged
/// tokens, so the editor's content shows through unchanged. Flags that no
/// longer fit the draft are ignored.
pub struct HighlightOverlay<'a> {
    text: &'a str,
    flags: &'a [FlaggedToken],
    scroll_offset: (usize, usize),
    gutter_width: u16,
    style: Style,
}

impl<'a> HighlightOverlay<'a> {
    pub fn new(text: &'a str, flags: &'a [FlaggedToken]) -> Self {
        Self {
            text,
            flags,
            scroll_offset: (0, 0),
            gutter_width: 0,
            style: misspelled_style(),
        }
    }

    pub fn scroll_offset(mut self, scroll_offset: (usize, usize)) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn gutter_width(mut self, gutter_width: u16) -> Self {
        self.gutter_width = gutter_width;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HighlightOverlay<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let (scroll_row, scroll_col) = self.scroll_offset;
        let text_x = area.x + self.gutter_width;

        for flag in self.flags {
            if self.text.get(flag.span()) != Some(flag.token.as_str()) {
                continue;
            }

            // Tokens never contain whitespace, so a span stays on one line
            let (row, col) = offset_to_position(self.text, flag.offset);
            if row < scroll_row || row - scroll_row >= area.height as usize {
                continue;
            }
            let y = area.y + (row - scroll_row) as u16;

            for c in col..col + flag.token.chars().count() {
                if c < scroll_col {
                    continue;
                }
                let x = text_x as usize + (c - scroll_col);
                if x >= (area.x + area.width) as usize {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x as u16, y)) {
                    cell.set_style(self.style);
                }
            }
        }
    }
}
