//! Integration tests for the status bar widget
//!
//! Tests the slot-based status bar system functionality

use penmate::widgets::{SlotAlignment, StatusBar, StatusSlot};
use ratatui::{
    backend::TestBackend,
    layout::Rect,
    style::{Color, Style},
    Terminal,
};

fn render_line(status_bar: &StatusBar, width: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    terminal
        .draw(|f| f.render_widget(status_bar, Rect::new(0, 0, width, 1)))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
}

#[test]
fn test_status_bar_creation() {
    let status_bar = StatusBar::new();

    // Should start with no slots
    assert_eq!(status_bar.slot_count(), 0);
}

#[test]
fn test_status_slot_creation() {
    let slot = StatusSlot::new("tone", "Tone: neutral")
        .with_alignment(SlotAlignment::Right)
        .with_priority(90)
        .with_style(Style::default().fg(Color::Red))
        .with_visibility(false);

    assert_eq!(slot.id, "tone");
    assert_eq!(slot.content, "Tone: neutral");
    assert_eq!(slot.alignment, SlotAlignment::Right);
    assert_eq!(slot.priority, 90);
    assert_eq!(slot.style, Style::default().fg(Color::Red));
    assert!(!slot.visible);
}

#[test]
fn test_status_bar_slot_management() {
    let mut status_bar = StatusBar::new();

    status_bar.set_slot(StatusSlot::new("mode", "EDIT").with_priority(100));
    status_bar.set_slot(StatusSlot::new("cursor", "Ln 1, Col 1").with_priority(90));
    status_bar.set_slot(
        StatusSlot::new("tone", "Tone: neutral").with_alignment(SlotAlignment::Right),
    );
    assert_eq!(status_bar.slot_count(), 3);

    // Setting an existing id replaces the slot
    status_bar.set_slot(StatusSlot::new("mode", "SUGGESTIONS"));
    assert_eq!(status_bar.slot_count(), 3);
    assert_eq!(status_bar.visible_content("mode"), Some("SUGGESTIONS"));

    assert_eq!(status_bar.visible_content("cursor"), Some("Ln 1, Col 1"));
    assert_eq!(status_bar.visible_content("missing"), None);
}

#[test]
fn test_status_bar_slot_visibility() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("message", "Checked"));

    status_bar.hide_slot("message");
    assert_eq!(status_bar.visible_content("message"), None);
    assert!(!render_line(&status_bar, 40).contains("Checked"));

    status_bar.show_slot("message");
    assert_eq!(status_bar.visible_content("message"), Some("Checked"));
    assert!(render_line(&status_bar, 40).contains("Checked"));
}

#[test]
fn test_status_bar_content_update() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("issues", "No issues"));

    status_bar.update_slot_content("issues", "2 suggestions");
    assert_eq!(status_bar.visible_content("issues"), Some("2 suggestions"));

    // Updating a missing slot is ignored
    status_bar.update_slot_content("nonexistent", "value");
    assert_eq!(status_bar.slot_count(), 1);
}

#[test]
fn test_status_bar_priority_order() {
    let mut status_bar = StatusBar::new();

    status_bar.set_slot(StatusSlot::new("low", "Low").with_priority(50));
    status_bar.set_slot(StatusSlot::new("high", "High").with_priority(100));
    status_bar.set_slot(StatusSlot::new("medium", "Medium").with_priority(75));

    let line = render_line(&status_bar, 60);
    assert!(line.starts_with("High | Medium | Low"));
}

#[test]
fn test_status_bar_alignment_groups() {
    let mut status_bar = StatusBar::new();

    status_bar.set_slot(StatusSlot::new("left", "Left").with_alignment(SlotAlignment::Left));
    status_bar.set_slot(
        StatusSlot::new("center", "Center").with_alignment(SlotAlignment::Center),
    );
    status_bar.set_slot(StatusSlot::new("right", "Right").with_alignment(SlotAlignment::Right));

    let line = render_line(&status_bar, 40);
    assert!(line.starts_with("Left"));
    assert!(line.trim_end().ends_with("Right"));

    let center = line.find("Center").unwrap();
    assert!(center > 4 && center < 40 - 5);
}

#[test]
fn test_narrow_status_bar_keeps_important_slots() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("mode", "EDIT").with_priority(100));
    status_bar.set_slot(StatusSlot::new("counts", "4 words, 16 chars").with_priority(90));
    status_bar.set_slot(StatusSlot::new("cursor", "Ln 1, Col 17").with_priority(80));
    status_bar.set_slot(
        StatusSlot::new("tone", "Tone: positive")
            .with_alignment(SlotAlignment::Right)
            .with_priority(100),
    );

    let wide = render_line(&status_bar, 80);
    assert!(wide.contains("Ln 1, Col 17"));

    let narrow = render_line(&status_bar, 30);
    assert!(narrow.starts_with("EDIT"));
    assert!(narrow.ends_with("Tone: positive"));
    assert!(!narrow.contains("Ln 1"));
    assert!(!narrow.contains("words"));
}

#[test]
fn test_status_bar_clone() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("mode", "EDIT"));

    let cloned_bar = status_bar.clone();
    assert_eq!(cloned_bar.slot_count(), 1);
    assert_eq!(cloned_bar.visible_content("mode"), Some("EDIT"));
}
