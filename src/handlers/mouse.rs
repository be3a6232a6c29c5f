/// Mouse input handler
use crate::events::{AppEvent, EventBus, Focus};
use crate::App;
use anyhow::Result;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;

/// Rows moved per wheel notch
const SCROLL_STEP: i16 = 3;

/// Mouse handler: clicks place the cursor or apply a suggestion
#[derive(Clone)]
pub struct MouseHandler {
    app_state: Arc<RwLock<App>>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl MouseHandler {
    pub fn new(app_state: Arc<RwLock<App>>, event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            app_state,
            event_sender,
        }
    }

    /// Subscribe to mouse events
    pub async fn subscribe(&self, event_bus: &EventBus) {
        let handler = self.clone();
        event_bus
            .subscribe("mouse_input", move |event| {
                let handler = handler.clone();
                async move { handler.handle_mouse_event(event).await }
            })
            .await;
    }

    async fn handle_mouse_event(&self, event: AppEvent) -> Result<()> {
        let AppEvent::MouseInput(mouse) = event else {
            return Ok(());
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse).await?,
            MouseEventKind::ScrollUp => self.app_state.write().await.scroll_editor(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.app_state.write().await.scroll_editor(SCROLL_STEP),
            _ => {}
        }

        Ok(())
    }

    /// Click on a suggestion applies it; click in the editor moves the cursor
    async fn handle_click(&self, mouse: MouseEvent) -> Result<()> {
        let (x, y) = (mouse.column, mouse.row);
        let mut app = self.app_state.write().await;

        if let Some(index) = app.suggestion_at(x, y) {
            app.selected_suggestion = index;
            drop(app);
            self.event_sender
                .send(AppEvent::CorrectionRequested { index })?;
            return Ok(());
        }

        if let Some((row, col)) = app.editor_position_at(x, y) {
            app.draft.set_cursor(row, col);
            drop(app);
            self.event_sender.send(AppEvent::FocusChanged {
                focus: Focus::Editor,
            })?;
        }

        Ok(())
    }
}
