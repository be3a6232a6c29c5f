use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event},
    layout::Rect,
    Terminal,
};
use tokio::sync::RwLock;

use crate::analysis::{replace_all, Analysis, Correction, WritingAssistant};
use crate::buffer::Buffer;
use crate::config::{Config, ConfigManager};
use crate::events::{AppEvent, EventBus, Focus};
use crate::handlers::{AppStateHandler, KeyboardHandler, MouseHandler};
use crate::widgets::toast::ToastManager;
use crate::widgets::StatusBar;

/// Screen areas from the last frame, used to hit-test mouse input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Text area of the editor, gutter included
    pub editor: Rect,
    /// Suggestion rows, one per suggestion
    pub suggestions: Rect,
}

/// The writing assistant widget and everything derived from its draft
#[derive(Clone)]
pub struct App {
    /// Whether the application is running
    pub running: bool,

    /// The text being written
    pub draft: Buffer,

    /// Tone and flagged tokens for the last checked version of the draft
    pub analysis: Analysis,

    /// Tone classifier and spell checker, fixed at startup
    pub assistant: WritingAssistant,

    pub config: Config,

    /// Scroll position for the editor (row, col)
    pub scroll_offset: (usize, usize),

    /// Which panel receives keyboard input
    pub focus: Focus,

    /// Highlighted row in the suggestion list
    pub selected_suggestion: usize,

    /// Message to display on status bar
    pub status_message: Option<String>,

    /// Directory holding the config and log files
    pub user_dir: PathBuf,

    pub toast_manager: ToastManager,

    pub status_bar: StatusBar,

    pub layout: ScreenLayout,
}

impl App {
    /// Create the app from the user's config directory
    pub async fn new() -> Self {
        Self::from_user_dir(Self::default_user_dir()).await
    }

    /// Create the app from `user_dir/config.json`. A config that cannot be
    /// read falls back to the defaults and is reported in a toast.
    pub async fn from_user_dir(user_dir: PathBuf) -> Self {
        if !user_dir.exists() {
            if let Err(e) = tokio::fs::create_dir_all(&user_dir).await {
                tracing::warn!("Could not create user directory: {}", e);
            }
        }

        let mut manager = ConfigManager::new(&user_dir);
        let load_error = manager.load().err();
        if let Some(e) = &load_error {
            tracing::warn!("Using default config: {:#}", e);
        }

        let mut app = Self::with_config(manager.into_config(), user_dir);
        if let Some(e) = load_error {
            app.toast_manager
                .add_error(format!("Config not loaded, using defaults: {:#}", e));
        }
        app
    }

    /// `<config dir>/penmate`, or `./penmate` when there is no config dir
    pub fn default_user_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("penmate")
    }

    pub fn with_config(config: Config, user_dir: PathBuf) -> Self {
        let assistant = WritingAssistant::from_config(&config.assistant);
        let toast_manager = ToastManager::new()
            .with_duration(Duration::from_millis(config.ui.toast_duration_ms));

        let mut app = Self {
            running: true,
            draft: Buffer::new(),
            analysis: Analysis::default(),
            assistant,
            config,
            scroll_offset: (0, 0),
            focus: Focus::Editor,
            selected_suggestion: 0,
            status_message: None,
            user_dir,
            toast_manager,
            status_bar: StatusBar::new(),
            layout: ScreenLayout::default(),
        };

        app.init_status_bar();
        app
    }

    /// Run the application until a quit event arrives
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app_state = Arc::new(RwLock::new(std::mem::take(self)));
        let event_bus = EventBus::new();

        let keyboard_handler = KeyboardHandler::new(app_state.clone(), event_bus.sender());
        let mouse_handler = MouseHandler::new(app_state.clone(), event_bus.sender());
        let app_state_handler = AppStateHandler::new(app_state.clone());

        keyboard_handler.subscribe(&event_bus).await;
        mouse_handler.subscribe(&event_bus).await;
        app_state_handler.subscribe(&event_bus).await;

        let processor = event_bus.clone();
        tokio::spawn(async move {
            if let Err(e) = processor.start_processing().await {
                tracing::error!("Event processing error: {:#}", e);
            }
        });

        let frame_duration = Duration::from_millis(16);
        let mut last_frame = Instant::now();

        loop {
            let frame_start = Instant::now();

            if !app_state.read().await.running {
                break;
            }

            if frame_start.duration_since(last_frame) >= frame_duration {
                let mut app = app_state.write().await;
                if let Err(e) = terminal.draw(|f| app.render(f)) {
                    tracing::error!("Rendering error: {}", e);
                    break;
                }
                drop(app);
                last_frame = frame_start;
            }

            if event::poll(Duration::from_millis(1))? {
                let published = match event::read()? {
                    Event::Key(key) => event_bus.publish(AppEvent::KeyInput(key)),
                    Event::Mouse(mouse) => event_bus.publish(AppEvent::MouseInput(mouse)),
                    _ => Ok(()),
                };
                if let Err(e) = published {
                    tracing::error!("{:#}", e);
                }
            } else {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }

        // Handlers still hold clones of the state, so copy it back out
        *self = app_state.read().await.clone();
        Ok(())
    }

    /// Current draft as one string
    pub fn text(&self) -> String {
        self.draft.content_as_string()
    }

    /// React to a user edit: analyze once the draft is long enough,
    /// otherwise clear whatever an earlier check found.
    pub fn on_draft_edited(&mut self) {
        if self.draft.char_count() > self.config.editor.check_threshold {
            self.recheck();
        } else if self.analysis != Analysis::default() {
            self.analysis = Analysis::default();
            self.selected_suggestion = 0;
            self.focus = Focus::Editor;
        }
    }

    /// Recompute tone and flagged tokens from the current draft
    pub fn recheck(&mut self) {
        self.analysis = self.assistant.analyze(&self.text());
        self.selected_suggestion = self
            .selected_suggestion
            .min(self.analysis.flags.len().saturating_sub(1));

        if self.analysis.flags.is_empty() && self.focus == Focus::Suggestions {
            self.focus = Focus::Editor;
        }

        tracing::debug!(
            tone = %self.analysis.tone,
            flagged = self.analysis.flags.len(),
            "draft checked"
        );
    }

    /// Replace every occurrence of the flagged token at `index` with its
    /// correction, then check the draft again.
    ///
    /// Returns `None` when there is no suggestion at `index`.
    pub fn apply_correction(&mut self, index: usize) -> Option<Correction> {
        let flag = self.analysis.flags.get(index)?.clone();
        let result = replace_all(&self.text(), &flag.token, &flag.correction);

        self.draft.set_content(&result.text);
        self.recheck();

        if result.replaced > 0 {
            tracing::info!(token = %flag.token, correction = %flag.correction, count = result.replaced, "correction applied");
            self.toast_manager.add_success(format!(
                "Replaced \"{}\" with \"{}\"",
                flag.token, flag.correction
            ));
        } else {
            self.toast_manager
                .add_info(format!("No \"{}\" left to replace", flag.token));
        }

        Some(result)
    }

    pub fn apply_selected_correction(&mut self) -> Option<Correction> {
        self.apply_correction(self.selected_suggestion)
    }

    pub fn select_next_suggestion(&mut self) {
        let count = self.analysis.flags.len();
        if count > 0 {
            self.selected_suggestion = (self.selected_suggestion + 1) % count;
        }
    }

    pub fn select_prev_suggestion(&mut self) {
        let count = self.analysis.flags.len();
        if count > 0 {
            self.selected_suggestion = (self.selected_suggestion + count - 1) % count;
        }
    }

    /// Move keyboard focus. Suggestions can only take focus while there are any.
    pub fn set_focus(&mut self, focus: Focus) -> bool {
        if focus == Focus::Suggestions && self.analysis.flags.is_empty() {
            return false;
        }
        self.focus = focus;
        true
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Initialize the status bar with default slots
    pub fn init_status_bar(&mut self) {
        use crate::widgets::{SlotAlignment, StatusSlot};
        use ratatui::style::{Color, Style};

        let bar = Style::default().fg(Color::White).bg(Color::LightBlue);

        self.status_bar.set_slot(
            StatusSlot::new("mode", "EDIT")
                .with_alignment(SlotAlignment::Left)
                .with_priority(100)
                .with_style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        );
        self.status_bar.set_slot(
            StatusSlot::new("counts", "")
                .with_alignment(SlotAlignment::Left)
                .with_priority(90)
                .with_style(bar),
        );
        self.status_bar.set_slot(
            StatusSlot::new("cursor", "")
                .with_alignment(SlotAlignment::Left)
                .with_priority(80)
                .with_style(bar),
        );
        self.status_bar.set_slot(
            StatusSlot::new("message", "")
                .with_alignment(SlotAlignment::Center)
                .with_priority(70)
                .with_style(Style::default().fg(Color::Black).bg(Color::Yellow))
                .with_visibility(false),
        );
        self.status_bar.set_slot(
            StatusSlot::new("tone", "")
                .with_alignment(SlotAlignment::Right)
                .with_priority(100)
                .with_style(bar),
        );
        self.status_bar.set_slot(
            StatusSlot::new("issues", "")
                .with_alignment(SlotAlignment::Right)
                .with_priority(60)
                .with_style(bar),
        );
    }

    /// Update status bar slots with current application state
    pub fn update_status_bar(&mut self) {
        let (row, col) = self.draft.cursor_pos;

        let mode = match self.focus {
            Focus::Editor => "EDIT",
            Focus::Suggestions => "SUGGESTIONS",
        };
        self.status_bar.update_slot_content("mode", mode);

        let counts = format!(
            "{} words, {} chars",
            self.draft.word_count(),
            self.draft.char_count()
        );
        self.status_bar.update_slot_content("counts", counts);
        self.status_bar
            .update_slot_content("cursor", format!("Ln {}, Col {}", row + 1, col + 1));

        if let Some(message) = &self.status_message {
            let message = message.clone();
            self.status_bar.update_slot_content("message", message);
            self.status_bar.show_slot("message");
        } else {
            self.status_bar.hide_slot("message");
        }

        self.status_bar
            .update_slot_content("tone", format!("Tone: {}", self.analysis.tone));

        let issues = match self.analysis.flags.len() {
            0 => "No issues".to_string(),
            1 => "1 suggestion".to_string(),
            n => format!("{} suggestions", n),
        };
        self.status_bar.update_slot_content("issues", issues);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), PathBuf::from("."))
    }
}
