use anyhow::{anyhow, Context, Result};
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the draft
    #[default]
    Editor,

    /// Arrow keys pick a suggestion, Enter applies it
    Suggestions,
}

/// Events flowing between the input system and the handlers
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),

    /// The draft was edited by the user
    DraftChanged { content: Arc<str> },

    /// "Check Writing": analyze the draft whatever its length
    CheckRequested,

    /// Apply the suggestion at `index` to the whole draft
    CorrectionRequested { index: usize },

    FocusChanged { focus: Focus },

    Quit,
}

impl AppEvent {
    /// Routing key used by subscribers
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::KeyInput(_) => "key_input",
            AppEvent::MouseInput(_) => "mouse_input",
            AppEvent::DraftChanged { .. } => "draft_changed",
            AppEvent::CheckRequested => "check_requested",
            AppEvent::CorrectionRequested { .. } => "correction_requested",
            AppEvent::FocusChanged { .. } => "focus_changed",
            AppEvent::Quit => "quit",
        }
    }
}

/// Future returned by an event handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// Async event handler function type
pub type AsyncEventHandler = Arc<dyn Fn(AppEvent) -> HandlerFuture + Send + Sync>;

/// Event bus for publishing and subscribing to events
#[derive(Clone)]
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<&'static str, Vec<AsyncEventHandler>>>>,
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: Arc<RwLock<Option<mpsc::UnboundedReceiver<AppEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            sender,
            receiver: Arc::new(RwLock::new(Some(receiver))),
        }
    }

    /// Get a sender for publishing events
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }

    /// Subscribe to one kind of event (see [`AppEvent::kind`])
    pub async fn subscribe<F, Fut>(&self, kind: &'static str, handler: F)
    where
        F: Fn(AppEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let boxed: AsyncEventHandler = Arc::new(move |event| -> HandlerFuture {
            Box::pin(handler(event))
        });
        let mut handlers = self.handlers.write().await;
        handlers.entry(kind).or_default().push(boxed);
    }

    pub fn publish(&self, event: AppEvent) -> Result<()> {
        let kind = event.kind();
        self.sender
            .send(event)
            .with_context(|| format!("Failed to publish {kind} event"))
    }

    /// Process events until every sender is dropped. Call once, from a
    /// background task.
    pub async fn start_processing(&self) -> Result<()> {
        let mut receiver = {
            let mut guard = self.receiver.write().await;
            guard
                .take()
                .ok_or_else(|| anyhow!("Event processor already started"))?
        };

        while let Some(event) = receiver.recv().await {
            self.dispatch(event).await;
        }

        Ok(())
    }

    /// Run every handler subscribed to the event's kind, in subscription order
    pub async fn dispatch(&self, event: AppEvent) {
        let kind = event.kind();
        let handlers = {
            let handlers = self.handlers.read().await;
            handlers.get(kind).cloned().unwrap_or_default()
        };

        for handler in handlers {
            if let Err(e) = handler(event.clone()).await {
                tracing::error!("Error in handler for {}: {:#}", kind, e);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
