pub mod action;
pub mod app;
pub mod blink;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod status;
pub mod style;
pub mod ui;

pub use action::EditorAction;
pub use app::App;
pub use config::Config;
pub use document::{CursorMovement, DocumentBuffer, Position, Selection};
pub use editor::EditorState;
pub use status::StatusReport;
pub use style::TextStyle;
