use crate::document::CursorMovement;

/// Logical editor actions
///
/// Input handlers resolve physical keys to one of these through the keymap;
/// nothing downstream of the keymap sees key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// Move the cursor, extending the selection when `extend` is set
    Move {
        movement: CursorMovement,
        extend: bool,
    },
    InsertChar(char),
    Backspace,
    DeleteForward,
    SplitLine,
    Indent,
    SelectAll,
    Copy,
    Cut,
    Paste,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    /// Step to the next colour of the palette
    CycleColor,
    /// Step to the next font family
    CycleFont,
    IncreaseFontSize,
    DecreaseFontSize,
    /// Replace the document with an empty one
    Clear,
    Quit,
}

impl EditorAction {
    pub fn move_to(movement: CursorMovement) -> Self {
        Self::Move {
            movement,
            extend: false,
        }
    }

    pub fn select_to(movement: CursorMovement) -> Self {
        Self::Move {
            movement,
            extend: true,
        }
    }
}
