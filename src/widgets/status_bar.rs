//! Bottom status line: focus mode, draft counts and cursor on the left, the
//! transient message in the middle, tone and suggestion count on the right.

use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEPARATOR: &str = " | ";
const BAR_STYLE: Style = Style::new().fg(Color::White).bg(Color::LightBlue);

/// Which part of the status line a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAlignment {
    Left,
    Center,
    Right,
}

/// A named piece of the status line
#[derive(Debug, Clone)]
pub struct StatusSlot {
    pub id: String,
    pub content: String,
    pub alignment: SlotAlignment,
    /// Higher priority slots come first in their group and are the last to
    /// be dropped when the line is too narrow
    pub priority: u8,
    pub style: Style,
    pub visible: bool,
}

impl StatusSlot {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            alignment: SlotAlignment::Left,
            priority: 50,
            style: BAR_STYLE,
            visible: true,
        }
    }

    pub fn with_alignment(mut self, alignment: SlotAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    fn width(&self) -> usize {
        self.content.chars().count()
    }
}

/// Status line made of [`StatusSlot`]s, kept in the order they were added
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    slots: Vec<StatusSlot>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot, replacing any slot with the same id in place
    pub fn set_slot(&mut self, slot: StatusSlot) {
        match self.slots.iter_mut().find(|s| s.id == slot.id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    pub fn hide_slot(&mut self, id: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.visible = false;
        }
    }

    pub fn show_slot(&mut self, id: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.visible = true;
        }
    }

    pub fn update_slot_content(&mut self, id: &str, content: impl Into<String>) {
        if let Some(slot) = self.slot_mut(id) {
            slot.content = content.into();
        }
    }

    /// Number of slots, hidden ones included
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Content of a slot, if it exists and is visible
    pub fn visible_content(&self, id: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| slot.id == id && slot.visible)
            .map(|slot| slot.content.as_str())
    }

    fn slot_mut(&mut self, id: &str) -> Option<&mut StatusSlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    /// Visible slots that fit in `width` columns. Lowest priority slots are
    /// dropped first; on a tie the one added last goes.
    fn fitting_slots(&self, width: usize) -> Vec<&StatusSlot> {
        let mut shown: Vec<&StatusSlot> = self.slots.iter().filter(|s| s.visible).collect();

        while shown.len() > 1 && line_width(&shown) > width {
            let drop = shown
                .iter()
                .enumerate()
                .min_by_key(|(i, slot)| (slot.priority, usize::MAX - i))
                .map(|(i, _)| i);
            if let Some(i) = drop {
                shown.remove(i);
            }
        }

        shown
    }
}

/// Slots of one alignment, highest priority first
fn group<'a>(slots: &[&'a StatusSlot], alignment: SlotAlignment) -> Vec<&'a StatusSlot> {
    let mut group: Vec<&StatusSlot> = slots
        .iter()
        .copied()
        .filter(|s| s.alignment == alignment)
        .collect();
    group.sort_by(|a, b| b.priority.cmp(&a.priority));
    group
}

fn group_width(group: &[&StatusSlot]) -> usize {
    let content: usize = group.iter().map(|s| s.width()).sum();
    content + SEPARATOR.len() * group.len().saturating_sub(1)
}

/// Columns needed to show every slot in `slots`
fn line_width(slots: &[&StatusSlot]) -> usize {
    [SlotAlignment::Left, SlotAlignment::Center, SlotAlignment::Right]
        .into_iter()
        .map(|alignment| group_width(&group(slots, alignment)))
        .sum()
}

fn push_group<'a>(spans: &mut Vec<Span<'a>>, group: &[&'a StatusSlot]) {
    for (i, slot) in group.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, BAR_STYLE));
        }
        spans.push(Span::styled(slot.content.as_str(), slot.style));
    }
}

fn padding<'a>(width: usize) -> Span<'a> {
    Span::styled(" ".repeat(width), BAR_STYLE)
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let shown = self.fitting_slots(width);
        let left = group(&shown, SlotAlignment::Left);
        let center = group(&shown, SlotAlignment::Center);
        let right = group(&shown, SlotAlignment::Right);

        // Space between the left and right groups, shared around the center
        let gap = width.saturating_sub(group_width(&left) + group_width(&right));
        let center_width = group_width(&center);
        let before_center = gap.saturating_sub(center_width) / 2;
        let after_center = gap.saturating_sub(center_width + before_center);

        let mut spans = Vec::new();
        push_group(&mut spans, &left);
        spans.push(padding(before_center));
        push_group(&mut spans, &center);
        spans.push(padding(after_center));
        push_group(&mut spans, &right);

        Paragraph::new(Line::from(spans))
            .style(BAR_STYLE)
            .render(area, buf);
    }
}
