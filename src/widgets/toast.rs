use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::time::{Duration, Instant};

/// Type of toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

impl ToastType {
    fn color(&self) -> Color {
        match self {
            ToastType::Info => Color::Cyan,
            ToastType::Success => Color::Green,
            ToastType::Error => Color::Red,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "ℹ",
            ToastType::Success => "✓",
            ToastType::Error => "✗",
        }
    }
}

/// A transient notice, such as the confirmation shown after a correction
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            message,
            toast_type,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// 0.0 = just created, 1.0 = expired
    pub fn progress(&self) -> f32 {
        let total = self.duration.as_secs_f32();
        if total == 0.0 {
            return 1.0;
        }
        (self.created_at.elapsed().as_secs_f32() / total).min(1.0)
    }
}

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Toast notification manager and renderer
#[derive(Debug, Clone)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    max_toasts: usize,
    duration: Duration,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            max_toasts: 5,
            duration: DEFAULT_DURATION,
        }
    }

    /// Lifetime given to toasts added through the `add_*` helpers
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);

        // Drop the oldest toasts past the limit
        if self.toasts.len() > self.max_toasts {
            let excess = self.toasts.len() - self.max_toasts;
            self.toasts.drain(..excess);
        }
    }

    pub fn add(&mut self, message: String, toast_type: ToastType) {
        let toast = Toast::new(message, toast_type).with_duration(self.duration);
        self.add_toast(toast);
    }

    pub fn add_info(&mut self, message: String) {
        self.add(message, ToastType::Info);
    }

    pub fn add_success(&mut self, message: String) {
        self.add(message, ToastType::Success);
    }

    pub fn add_error(&mut self, message: String) {
        self.add(message, ToastType::Error);
    }

    /// Remove expired toasts
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn has_active_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn render(&self, area: Rect, buf: &mut TuiBuffer) {
        if self.toasts.is_empty() {
            return;
        }

        // Top-right corner, 3 lines per toast
        let toast_width = 44.min(area.width.saturating_sub(2));
        let toast_height = (self.toasts.len() as u16 * 3).min(area.height / 2);

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(toast_width + 1),
            y: area.y + 1,
            width: toast_width,
            height: toast_height,
        };

        for (i, toast) in self.toasts.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= toast_area.height {
                break;
            }

            let single = Rect {
                x: toast_area.x,
                y: toast_area.y + y_offset,
                width: toast_area.width,
                height: 3.min(toast_area.height - y_offset),
            };

            Self::render_single_toast(toast, single, buf);
        }
    }

    fn render_single_toast(toast: &Toast, area: Rect, buf: &mut TuiBuffer) {
        let progress = toast.progress();
        let primary_color = toast.toast_type.color();
        // Fade the border in the last 10% of the toast's life
        let border_color = if progress > 0.9 {
            Color::DarkGray
        } else {
            primary_color
        };

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Color::Rgb(30, 30, 30)));

        let inner = block.inner(area);
        block.render(area, buf);

        let room = (inner.width as usize).saturating_sub(2);
        let message: String = if toast.message.chars().count() > room {
            let mut truncated: String =
                toast.message.chars().take(room.saturating_sub(3)).collect();
            truncated.push_str("...");
            truncated
        } else {
            toast.message.clone()
        };

        let content = Line::from(vec![
            Span::styled(
                format!("{} ", toast.toast_type.icon()),
                Style::default()
                    .fg(primary_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(Color::White)),
        ]);

        if inner.height >= 2 {
            Paragraph::new(content).render(Rect { height: 1, ..inner }, buf);

            let remaining = ((1.0 - progress) * inner.width as f32) as u16;
            let progress_line = Line::from(vec![
                Span::styled(
                    "█".repeat(remaining as usize),
                    Style::default().fg(primary_color),
                ),
                Span::styled(
                    "░".repeat((inner.width - remaining) as usize),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            Paragraph::new(progress_line).render(
                Rect {
                    y: inner.y + 1,
                    height: 1,
                    ..inner
                },
                buf,
            );
        } else {
            Paragraph::new(content).render(inner, buf);
        }
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Widget wrapper for rendering toasts
pub struct ToastWidget<'a> {
    manager: &'a ToastManager,
}

impl<'a> ToastWidget<'a> {
    pub fn new(manager: &'a ToastManager) -> Self {
        Self { manager }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        self.manager.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_toasts() {
        let mut manager = ToastManager::new();
        for i in 0..8 {
            manager.add_info(format!("toast {i}"));
        }
        assert_eq!(manager.toasts().len(), 5);
        assert_eq!(manager.toasts()[0].message, "toast 3");
    }

    #[test]
    fn zero_duration_expires() {
        let mut manager = ToastManager::new().with_duration(Duration::ZERO);
        manager.add_success("done".into());
        std::thread::sleep(Duration::from_millis(2));
        manager.update();
        assert!(!manager.has_active_toasts());
    }

    #[test]
    fn helpers_set_the_type() {
        let mut manager = ToastManager::new();
        manager.add_success("done".into());
        manager.add_error("failed".into());
        let types: Vec<ToastType> = manager.toasts().iter().map(|t| t.toast_type).collect();
        assert_eq!(types, vec![ToastType::Success, ToastType::Error]);
    }
}
