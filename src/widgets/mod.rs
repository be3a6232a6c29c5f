pub mod banner;
pub mod editor;
pub mod highlight;
pub mod status_bar;
pub mod suggestions;
pub mod toast;

pub use banner::{AdBanner, Header};
pub use editor::Editor;
pub use highlight::HighlightOverlay;
pub use status_bar::{SlotAlignment, StatusBar, StatusSlot};
pub use suggestions::SuggestionList;
