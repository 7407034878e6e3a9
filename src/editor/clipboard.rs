use crate::clipboard::Clipboard;
use crate::error::ClipboardError;

use super::EditorState;

/// Copy, cut and paste between the editor and a clipboard
///
/// On error the editor state is left exactly as it was.
pub struct ClipboardOperations;

impl ClipboardOperations {
    /// Copy the selected text. Returns `false` when nothing is selected.
    pub fn copy(
        editor: &EditorState,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        if !editor.has_selection() {
            return Ok(false);
        }
        clipboard.set_text(&editor.selected_text())?;
        Ok(true)
    }

    /// Copy the selection, then delete it once the copy went through
    pub fn cut(
        editor: &mut EditorState,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        if !Self::copy(editor, clipboard)? {
            return Ok(false);
        }
        editor.delete_selection();
        Ok(true)
    }

    /// Insert the clipboard text at the current cursor, replacing any selection.
    /// An empty clipboard is a no-op.
    pub fn paste(
        editor: &mut EditorState,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        let text = clipboard.get_text()?;
        if text.is_empty() {
            return Ok(false);
        }
        editor.insert_text(&text);
        Ok(true)
    }
}
