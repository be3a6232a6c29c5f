use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Read-only list of suggestion lines under the editor
pub struct SuggestionList<'a> {
    suggestions: &'a [String],
    selected: Option<usize>,
    focused: bool,
}

impl<'a> SuggestionList<'a> {
    pub fn new(suggestions: &'a [String]) -> Self {
        Self {
            suggestions,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = (!self.suggestions.is_empty())
            .then(|| selected.min(self.suggestions.len() - 1));
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height needed to show every suggestion, borders included
    pub fn height(suggestion_count: usize) -> u16 {
        suggestion_count.max(1) as u16 + 2
    }

    /// Area inside the border where suggestion rows are drawn
    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let border_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title(Span::styled(
                " Suggestions: ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if self.suggestions.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No suggestions",
                Style::default().fg(Color::DarkGray),
            )))
            .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let icon = Span::styled("⚠ ", Style::default().fg(Color::Yellow));
                if self.focused && self.selected == Some(i) {
                    Line::from(vec![
                        icon,
                        Span::styled(
                            suggestion.as_str(),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        icon,
                        Span::styled(suggestion.as_str(), Style::default().fg(Color::Gray)),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
