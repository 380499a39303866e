pub mod chat;
pub mod theme_toggle;

pub use chat::ChatWidgetView;
pub use theme_toggle::{ThemeToggle, use_saved_theme};
