pub mod buffer;
pub mod cursor;
pub mod selection;

pub use buffer::{DocumentBuffer, LINE_SEPARATOR};
pub use cursor::{CursorMovement, Position};
pub use selection::Selection;
