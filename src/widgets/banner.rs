use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::analysis::Tone;

/// Static advertisement placeholder shown above the assistant. Pure decoration.
pub struct AdBanner;

impl AdBanner {
    pub const HEIGHT: u16 = 4;
}

impl Widget for AdBanner {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        Paragraph::new("Advertisement")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray).bg(Color::Rgb(40, 40, 48)))
            .render(chunks[0], buf);

        Paragraph::new("Ads will appear here")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[1], buf);
    }
}

/// Title line with the tone badge on the right
pub struct Header {
    tone: Tone,
}

impl Header {
    pub fn new(tone: Tone) -> Self {
        Self { tone }
    }

    fn badge_style(&self) -> Style {
        let style = match self.tone {
            Tone::Positive => Style::default().fg(Color::Black).bg(Color::LightGreen),
            Tone::Negative => Style::default().fg(Color::White).bg(Color::Red),
            Tone::Neutral => Style::default().fg(Color::Black).bg(Color::Gray),
        };
        style.add_modifier(Modifier::BOLD)
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let badge = format!(" {} Tone ", self.tone.title());
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(badge.chars().count() as u16),
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            "Writing Assistant",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )))
        .render(chunks[0], buf);

        Paragraph::new(Span::styled(badge, self.badge_style())).render(chunks[1], buf);
    }
}
