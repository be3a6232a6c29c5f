use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::buffer::Buffer;

const GUTTER_STYLE: Style = Style::new().fg(Color::Rgb(100, 100, 120));

/// The editable text surface. Renders the visible part of the draft with an
/// optional line number gutter, or a placeholder while the draft is empty.
pub struct Editor<'a> {
    pub buffer: &'a Buffer,
    pub scroll_offset: (usize, usize), // (row, col) offset for viewport scrolling
    pub show_line_numbers: bool,
    pub placeholder: &'a str,
}

impl<'a> Editor<'a> {
    pub fn new(buffer: &'a Buffer) -> Self {
        Self {
            buffer,
            scroll_offset: (0, 0),
            show_line_numbers: true,
            placeholder: "Start writing here...",
        }
    }

    pub fn scroll_offset(mut self, scroll_offset: (usize, usize)) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Columns taken by the line number gutter
    pub fn gutter_width(&self) -> u16 {
        if self.show_line_numbers {
            self.buffer.line_number_width() as u16
        } else {
            0
        }
    }

    /// Screen position of the buffer cursor, if it is inside `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let (row, col) = self.buffer.cursor_pos;
        let (scroll_row, scroll_col) = self.scroll_offset;
        if row < scroll_row || col < scroll_col {
            return None;
        }

        let x = (col - scroll_col) as u16 + self.gutter_width();
        let y = (row - scroll_row) as u16;
        (x < area.width && y < area.height).then(|| Position::new(area.x + x, area.y + y))
    }
}

impl Widget for Editor<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let gutter = self.gutter_width() as usize;
        let (start_row, h_offset) = self.scroll_offset;
        let end_row = (start_row + area.height as usize).min(self.buffer.content.len());

        let mut lines = Vec::with_capacity(end_row.saturating_sub(start_row));
        for i in start_row..end_row {
            let mut spans = Vec::with_capacity(3);

            if self.show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", i + 1, width = gutter - 1),
                    GUTTER_STYLE,
                ));
            }

            if i == 0 && self.buffer.is_empty() {
                spans.push(Span::styled(
                    self.placeholder,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            } else {
                let visible: String = self.buffer.content[i].chars().skip(h_offset).collect();
                spans.push(Span::raw(visible));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}
