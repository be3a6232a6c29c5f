/// Application state handlers that respond to events
use crate::events::{AppEvent, EventBus};
use crate::App;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Applies analysis, correction, focus and quit events to the app
#[derive(Clone)]
pub struct AppStateHandler {
    app_state: Arc<RwLock<App>>,
}

impl AppStateHandler {
    pub fn new(app_state: Arc<RwLock<App>>) -> Self {
        Self { app_state }
    }

    async fn on<F, Fut>(&self, event_bus: &EventBus, kind: &'static str, f: F)
    where
        F: Fn(AppStateHandler, AppEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let handler = self.clone();
        event_bus
            .subscribe(kind, move |event| f(handler.clone(), event))
            .await;
    }

    /// Subscribe to all relevant events
    pub async fn subscribe(&self, event_bus: &EventBus) {
        self.on(event_bus, "draft_changed", |h, e| async move {
            h.handle_draft_changed(e).await
        })
        .await;
        self.on(event_bus, "check_requested", |h, _| async move {
            h.handle_check_requested().await
        })
        .await;
        self.on(event_bus, "correction_requested", |h, e| async move {
            h.handle_correction_requested(e).await
        })
        .await;
        self.on(event_bus, "focus_changed", |h, e| async move {
            h.handle_focus_changed(e).await
        })
        .await;
        self.on(event_bus, "quit", |h, _| async move { h.handle_quit().await })
            .await;
    }

    async fn handle_draft_changed(&self, event: AppEvent) -> Result<()> {
        if let AppEvent::DraftChanged { content } = event {
            let mut app = self.app_state.write().await;
            // Coalesce bursts of typing: only the latest draft is analyzed
            if *content == *app.text() {
                app.on_draft_edited();
            }
        }
        Ok(())
    }

    /// "Check Writing": analyze regardless of draft length
    async fn handle_check_requested(&self) -> Result<()> {
        let mut app = self.app_state.write().await;
        app.recheck();

        let message = match app.analysis.flags.len() {
            0 => format!("No issues found, {} tone", app.analysis.tone),
            1 => format!("1 suggestion, {} tone", app.analysis.tone),
            n => format!("{} suggestions, {} tone", n, app.analysis.tone),
        };
        app.set_status_message(message);
        Ok(())
    }

    async fn handle_correction_requested(&self, event: AppEvent) -> Result<()> {
        if let AppEvent::CorrectionRequested { index } = event {
            let mut app = self.app_state.write().await;
            if app.apply_correction(index).is_none() {
                tracing::debug!(index, "no suggestion to apply");
            }
        }
        Ok(())
    }

    async fn handle_focus_changed(&self, event: AppEvent) -> Result<()> {
        if let AppEvent::FocusChanged { focus } = event {
            let mut app = self.app_state.write().await;
            if !app.set_focus(focus) {
                app.set_status_message("No suggestions to pick from".to_string());
            }
        }
        Ok(())
    }

    async fn handle_quit(&self) -> Result<()> {
        self.app_state.write().await.running = false;
        Ok(())
    }
}
