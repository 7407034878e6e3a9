pub mod editor;
pub mod status_bar;

pub use editor::{EditorWidget, column_at_display_x, text_style};
pub use status_bar::StatusBar;
