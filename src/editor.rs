pub mod clipboard;
pub mod editing;
pub mod navigation;

pub use clipboard::ClipboardOperations;
pub use editing::INDENT;

use crate::action::EditorAction;
use crate::document::{DocumentBuffer, Position, Selection};
use crate::style::TextStyle;

/// Editor state: document, cursor, selection and style flags
///
/// Every mutation goes through the methods in `editing` and `navigation`, so
/// the cursor is always inside the document and a non-empty selection always
/// ends at the cursor.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    buffer: DocumentBuffer,
    cursor: Position,
    selection: Option<Selection>,
    style: TextStyle,
}

impl EditorState {
    /// Create an editor with an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor holding `text`, cursor at the start
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: DocumentBuffer::from_text(text),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the document buffer
    pub fn buffer(&self) -> &DocumentBuffer {
        &self.buffer
    }

    /// Get all lines
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// Get the current cursor position
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Raw selection, possibly empty
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    /// Replace the document; cursor goes to the start and the selection is dropped
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.cursor = Position::origin();
        self.selection = None;
        tracing::debug!(lines = self.buffer.line_count(), "document replaced");
    }

    /// Document content with lines joined by `\n`
    pub fn get_text(&self) -> String {
        self.buffer.content()
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// True if a selection exists and is not empty
    pub fn has_selection(&self) -> bool {
        self.selection.is_some_and(|sel| !sel.is_empty())
    }

    /// Selection as `(start, end)` in document order, `None` without a selection
    pub fn normalized_selection(&self) -> Option<(Position, Position)> {
        self.selection
            .filter(|sel| !sel.is_empty())
            .map(|sel| sel.normalized())
    }

    /// Selected text, empty without a selection
    pub fn selected_text(&self) -> String {
        match self.normalized_selection() {
            Some((start, end)) => self.buffer.text_in_range(start, end),
            None => String::new(),
        }
    }

    /// Apply an action that needs nothing beyond the editor state.
    ///
    /// Returns `false` for actions owned by the caller (clipboard, quit).
    pub fn apply(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::Move { movement, extend } => self.move_cursor(movement, extend),
            EditorAction::InsertChar(c) => self.insert_char(c),
            EditorAction::Backspace => self.backspace(),
            EditorAction::DeleteForward => self.delete_forward(),
            EditorAction::SplitLine => self.split_line(),
            EditorAction::Indent => self.indent(),
            EditorAction::SelectAll => self.select_all(),
            EditorAction::ToggleBold => self.style.toggle_bold(),
            EditorAction::ToggleItalic => self.style.toggle_italic(),
            EditorAction::ToggleUnderline => self.style.toggle_underline(),
            EditorAction::CycleColor => self.style.cycle_color(),
            EditorAction::CycleFont => self.style.cycle_font(),
            EditorAction::IncreaseFontSize => self.style.increase_font_size(),
            EditorAction::DecreaseFontSize => self.style.decrease_font_size(),
            EditorAction::Clear => self.clear(),
            EditorAction::Copy | EditorAction::Cut | EditorAction::Paste | EditorAction::Quit => {
                return false;
            }
        }
        self.debug_check_invariants();
        true
    }

    fn debug_check_invariants(&self) {
        debug_assert!(self.buffer.line_count() >= 1);
        debug_assert_eq!(self.buffer.clamp(self.cursor), self.cursor);
        if let Some(sel) = self.selection {
            debug_assert_eq!(sel.active, self.cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CursorMovement;

    #[test]
    fn test_new_editor() {
        let editor = EditorState::new();
        assert_eq!(editor.lines(), &[String::new()]);
        assert_eq!(editor.cursor(), Position::origin());
        assert!(editor.selection().is_none());
        assert!(!editor.has_selection());
    }

    #[test]
    fn test_set_text_resets_cursor_and_selection() {
        let mut editor = EditorState::from_text("abc\ndef");
        editor.select_all();
        assert!(editor.has_selection());

        editor.set_text("x\ny\nz");
        assert_eq!(editor.cursor(), Position::origin());
        assert!(editor.selection().is_none());
        assert_eq!(editor.buffer().line_count(), 3);
    }

    #[test]
    fn test_set_text_empty_has_one_line() {
        let mut editor = EditorState::from_text("something");
        editor.set_text("");
        assert_eq!(editor.buffer().line_count(), 1);
        assert_eq!(editor.get_text(), "");
    }

    #[test]
    fn test_empty_selection_is_no_selection() {
        let mut editor = EditorState::from_text("abc");
        editor.set_selection_anchor(Position::new(0, 1));
        assert!(editor.selection().is_some());
        assert!(!editor.has_selection());
        assert_eq!(editor.normalized_selection(), None);
        assert_eq!(editor.selected_text(), "");
    }

    #[test]
    fn test_selected_text_single_line() {
        let mut editor = EditorState::from_text("hello world");
        editor.set_selection_anchor(Position::new(0, 6));
        editor.set_selection_active(Position::new(0, 11));
        assert_eq!(editor.selected_text(), "world");
    }

    #[test]
    fn test_selected_text_multi_line_includes_middle_lines() {
        let mut editor = EditorState::from_text("alpha\nbeta\ngamma\ndelta");
        editor.set_selection_anchor(Position::new(3, 2));
        editor.set_selection_active(Position::new(0, 3));
        assert_eq!(editor.selected_text(), "ha\nbeta\ngamma\nde");
    }

    #[test]
    fn test_apply_dispatches_edits() {
        let mut editor = EditorState::from_text("ab");
        assert!(editor.apply(EditorAction::move_to(CursorMovement::LineEnd)));
        assert!(editor.apply(EditorAction::InsertChar('c')));
        assert!(editor.apply(EditorAction::SplitLine));
        assert!(editor.apply(EditorAction::Indent));
        assert_eq!(editor.get_text(), "abc\n    ");
        assert_eq!(editor.cursor(), Position::new(1, 4));
    }

    #[test]
    fn test_apply_style_toggles() {
        let mut editor = EditorState::from_text("ab");
        editor.apply(EditorAction::ToggleBold);
        editor.apply(EditorAction::ToggleItalic);
        assert!(editor.style().bold);
        assert!(editor.style().italic);
        assert!(!editor.style().underline);
        // Style flags never touch the document
        assert_eq!(editor.get_text(), "ab");
    }

    #[test]
    fn test_apply_font_and_color_changes() {
        let mut editor = EditorState::from_text("ab");
        assert!(editor.apply(EditorAction::CycleColor));
        assert!(editor.apply(EditorAction::CycleFont));
        assert!(editor.apply(EditorAction::IncreaseFontSize));
        assert!(editor.apply(EditorAction::IncreaseFontSize));
        assert!(editor.apply(EditorAction::DecreaseFontSize));
        assert_eq!(editor.style().color, "red");
        assert_eq!(editor.style().font_family, "Courier New");
        assert_eq!(editor.style().font_size, 14);
        assert_eq!(editor.get_text(), "ab");
    }

    #[test]
    fn test_apply_leaves_clipboard_to_caller() {
        let mut editor = EditorState::from_text("ab");
        editor.select_all();
        assert!(!editor.apply(EditorAction::Cut));
        assert!(!editor.apply(EditorAction::Quit));
        assert_eq!(editor.get_text(), "ab");
        assert!(editor.has_selection());
    }

    #[test]
    fn test_apply_clear() {
        let mut editor = EditorState::from_text("ab\ncd");
        editor.apply(EditorAction::Clear);
        assert_eq!(editor.get_text(), "");
        assert_eq!(editor.cursor(), Position::origin());
    }
}
