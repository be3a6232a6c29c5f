use crate::buffer::CursorMovement;
use crate::events::Focus;
use crate::widgets::toast::ToastWidget;
use crate::widgets::{AdBanner, Editor, Header, HighlightOverlay, SuggestionList};
use crate::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Most suggestion rows shown at once
const MAX_SUGGESTION_ROWS: usize = 8;

impl App {
    /// Main render function for the application UI
    pub fn render(&mut self, f: &mut Frame) {
        let banner_height = if self.config.ui.show_ad_banner {
            AdBanner::HEIGHT
        } else {
            0
        };
        let suggestion_rows = self.analysis.suggestions.len().min(MAX_SUGGESTION_ROWS);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Length(1), // Title and tone badge
                Constraint::Min(3),    // Editor
                Constraint::Length(SuggestionList::height(suggestion_rows)),
                Constraint::Length(1), // Status line
            ])
            .split(f.area());

        if banner_height > 0 {
            f.render_widget(AdBanner, chunks[0]);
        }
        f.render_widget(Header::new(self.analysis.tone), chunks[1]);

        self.render_editor(f, chunks[2]);
        self.render_suggestions(f, chunks[3]);
        self.render_status_line(f, chunks[4]);

        self.toast_manager.update();
        if self.toast_manager.has_active_toasts() {
            f.render_widget(ToastWidget::new(&self.toast_manager), f.area());
        }
    }

    /// Render the editor, the highlight overlay on top of it, and the cursor
    fn render_editor(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Editor {
            Style::default().fg(Color::LightBlue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        self.layout.editor = inner;
        self.ensure_cursor_visible(inner);

        let text = self.text();
        let editor = Editor::new(&self.draft)
            .scroll_offset(self.scroll_offset)
            .show_line_numbers(self.config.editor.show_line_numbers);
        let gutter = editor.gutter_width();
        let cursor = editor.cursor_position(inner);

        f.render_widget(editor, inner);
        f.render_widget(
            HighlightOverlay::new(&text, &self.analysis.flags)
                .scroll_offset(self.scroll_offset)
                .gutter_width(gutter),
            inner,
        );

        if self.focus == Focus::Editor {
            if let Some(position) = cursor {
                f.set_cursor_position(position);
            }
        }
    }

    fn render_suggestions(&mut self, f: &mut Frame, area: Rect) {
        self.layout.suggestions = SuggestionList::inner_area(area);

        // Keep the selected row in view when the list is longer than the panel
        let visible = self.layout.suggestions.height.max(1) as usize;
        let first = self.first_visible_suggestion(visible);
        let shown = &self.analysis.suggestions[first..];

        let list = SuggestionList::new(shown)
            .selected(self.selected_suggestion - first)
            .focused(self.focus == Focus::Suggestions);
        f.render_widget(list, area);
    }

    /// Index of the first suggestion drawn when `visible` rows fit
    pub fn first_visible_suggestion(&self, visible: usize) -> usize {
        (self.selected_suggestion + 1).saturating_sub(visible.max(1))
    }

    fn render_status_line(&mut self, f: &mut Frame, area: Rect) {
        self.update_status_bar();
        f.render_widget(&self.status_bar, area);
    }

    /// Scroll so the draft cursor sits inside `area`
    pub fn ensure_cursor_visible(&mut self, area: Rect) {
        let (row, col) = self.draft.cursor_pos;
        let gutter = if self.config.editor.show_line_numbers {
            self.draft.line_number_width()
        } else {
            0
        };
        let visible_rows = (area.height as usize).max(1);
        let visible_cols = (area.width as usize).saturating_sub(gutter).max(1);

        if row < self.scroll_offset.0 {
            self.scroll_offset.0 = row;
        } else if row >= self.scroll_offset.0 + visible_rows {
            self.scroll_offset.0 = row + 1 - visible_rows;
        }

        if col < self.scroll_offset.1 {
            self.scroll_offset.1 = col;
        } else if col >= self.scroll_offset.1 + visible_cols {
            self.scroll_offset.1 = col + 1 - visible_cols;
        }
    }

    /// Mouse wheel: move the cursor `delta` rows and let the view follow it
    pub fn scroll_editor(&mut self, delta: i16) {
        let movement = if delta < 0 {
            CursorMovement::Up
        } else {
            CursorMovement::Down
        };
        for _ in 0..delta.unsigned_abs() {
            self.draft.move_cursor(movement);
        }
    }

    /// Map a screen cell to a draft position, if it lies in the editor
    pub fn editor_position_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let area = self.layout.editor;
        if !area.contains(Position::new(x, y)) {
            return None;
        }

        let gutter = if self.config.editor.show_line_numbers {
            self.draft.line_number_width() as u16
        } else {
            0
        };
        let row = self.scroll_offset.0 + (y - area.y) as usize;
        let col = self.scroll_offset.1 + (x - area.x).saturating_sub(gutter) as usize;
        Some((row, col))
    }

    /// Index of the suggestion drawn at a screen cell
    pub fn suggestion_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.layout.suggestions;
        if !area.contains(Position::new(x, y)) {
            return None;
        }

        let first = self.first_visible_suggestion(area.height as usize);
        let index = first + (y - area.y) as usize;
        (index < self.analysis.flags.len()).then_some(index)
    }
}
