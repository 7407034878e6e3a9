use std::fmt;

use crate::editor::EditorState;

/// Read-only status summary derived from the editor state
///
/// Holds no state of its own; build one after each event and throw it away.
#[derive(Debug, Clone, Copy)]
pub struct StatusReport<'a> {
    editor: &'a EditorState,
}

impl<'a> StatusReport<'a> {
    pub fn new(editor: &'a EditorState) -> Self {
        Self { editor }
    }

    /// 1-based `(line, column)` of the cursor
    pub fn cursor_label(&self) -> (usize, usize) {
        let cursor = self.editor.cursor();
        (cursor.line + 1, cursor.column + 1)
    }

    pub fn word_count(&self) -> usize {
        self.editor.buffer().word_count()
    }

    pub fn character_count(&self) -> usize {
        self.editor.buffer().total_characters()
    }

    pub fn line_count(&self) -> usize {
        self.editor.buffer().line_count()
    }

    /// Length in characters of the selected text, `None` without a selection
    pub fn selection_label(&self) -> Option<usize> {
        self.editor
            .has_selection()
            .then(|| self.editor.selected_text().chars().count())
    }
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.cursor_label();
        write!(
            f,
            "Line: {}, Column: {} | Word Count: {} | Character Count: {} | Line Count: {}",
            line,
            column,
            self.word_count(),
            self.character_count(),
            self.line_count()
        )?;
        if let Some(len) = self.selection_label() {
            write!(f, " | Selection: {} chars", len)?;
        }
        Ok(())
    }
}
