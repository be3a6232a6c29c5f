//! Terminal writing assistant: a draft editor with tone detection,
//! dictionary based spelling suggestions and whole-draft corrections.

pub mod analysis;
pub mod app;
pub mod buffer;
pub mod config;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod ui;
pub mod widgets;

// Re-export main types for convenience
pub use app::App;
pub use buffer::Buffer;
pub use events::Focus;
