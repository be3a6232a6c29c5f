use crate::buffer::CursorMovement;
use crate::events::{AppEvent, EventBus, Focus};
use crate::App;
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;

/// Keyboard handler that edits the draft and drives the suggestion list
#[derive(Clone)]
pub struct KeyboardHandler {
    app_state: Arc<RwLock<App>>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl KeyboardHandler {
    pub fn new(app_state: Arc<RwLock<App>>, event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            app_state,
            event_sender,
        }
    }

    /// Subscribe to keyboard events
    pub async fn subscribe(&self, event_bus: &EventBus) {
        let handler = self.clone();
        event_bus
            .subscribe("key_input", move |event| {
                let handler = handler.clone();
                async move { handler.handle_key_event(event).await }
            })
            .await;
    }

    async fn handle_key_event(&self, event: AppEvent) -> Result<()> {
        let AppEvent::KeyInput(key) = event else {
            return Ok(());
        };
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.event_sender.send(AppEvent::Quit)?;
                return Ok(());
            }
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                self.event_sender.send(AppEvent::CheckRequested)?;
                return Ok(());
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                let focus = match self.app_state.read().await.focus {
                    Focus::Editor => Focus::Suggestions,
                    Focus::Suggestions => Focus::Editor,
                };
                self.event_sender.send(AppEvent::FocusChanged { focus })?;
                return Ok(());
            }
            _ => {}
        }

        let focus = self.app_state.read().await.focus;
        match focus {
            Focus::Editor => self.handle_editor_key(key).await,
            Focus::Suggestions => self.handle_suggestions_key(key).await,
        }
    }

    /// Keys while the editor has focus
    async fn handle_editor_key(&self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let movement = match key.code {
            KeyCode::Up => Some(CursorMovement::Up),
            KeyCode::Down => Some(CursorMovement::Down),
            KeyCode::Left => Some(CursorMovement::Left),
            KeyCode::Right => Some(CursorMovement::Right),
            KeyCode::Home if ctrl => Some(CursorMovement::BufferStart),
            KeyCode::Home => Some(CursorMovement::LineStart),
            KeyCode::End if ctrl => Some(CursorMovement::BufferEnd),
            KeyCode::End => Some(CursorMovement::LineEnd),
            KeyCode::PageUp => Some(CursorMovement::PageUp),
            KeyCode::PageDown => Some(CursorMovement::PageDown),
            _ => None,
        };

        if let Some(movement) = movement {
            self.app_state.write().await.draft.move_cursor(movement);
            return Ok(());
        }

        let mut app = self.app_state.write().await;
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                app.draft.insert_char(c)
            }
            (KeyCode::Enter, _) => app.draft.insert_newline(),
            (KeyCode::Backspace, _) => app.draft.backspace(),
            (KeyCode::Delete, _) => app.draft.delete(),
            (KeyCode::Esc, _) => {
                app.clear_status_message();
                return Ok(());
            }
            _ => return Ok(()), // Ignore other key combinations
        }

        let content: Arc<str> = app.text().into();
        drop(app);
        self.event_sender.send(AppEvent::DraftChanged { content })?;

        Ok(())
    }

    /// Keys while the suggestion list has focus
    async fn handle_suggestions_key(&self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up => self.app_state.write().await.select_prev_suggestion(),
            KeyCode::Down => self.app_state.write().await.select_next_suggestion(),
            KeyCode::Enter => {
                let index = self.app_state.read().await.selected_suggestion;
                self.event_sender
                    .send(AppEvent::CorrectionRequested { index })?;
            }
            KeyCode::Esc => {
                self.event_sender.send(AppEvent::FocusChanged {
                    focus: Focus::Editor,
                })?;
            }
            _ => {}
        }

        Ok(())
    }
}
