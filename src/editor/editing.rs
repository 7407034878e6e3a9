use std::borrow::Cow;

use crate::document::{LINE_SEPARATOR, Position};

use super::EditorState;

/// Text inserted by `indent`
pub const INDENT: &str = "    ";

/// Edit operations. Each one first removes a non-empty selection.
impl EditorState {
    /// Remove the selected range in one splice and collapse to its start.
    /// Returns `false` when there was nothing selected.
    pub fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.normalized_selection() else {
            return false;
        };
        self.cursor = self.buffer.remove_range(start, end);
        self.selection = None;
        true
    }

    /// Insert text at the cursor, replacing any selection.
    ///
    /// Line separators (`\n`, `\r\n`, `\r`) in `text` split the line, so a
    /// multi-line paste becomes several lines.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        self.selection = None;

        let text = if text.contains('\r') {
            Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            Cow::Borrowed(text)
        };

        let mut segments = text.split(LINE_SEPARATOR);
        if let Some(first) = segments.next() {
            self.cursor = self.buffer.insert_str_at(self.cursor, first);
        }
        for segment in segments {
            self.cursor = self.buffer.split_line_at(self.cursor);
            self.cursor = self.buffer.insert_str_at(self.cursor, segment);
        }
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    /// Delete the character before the cursor, joining with the previous line
    /// at column 0
    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        self.selection = None;

        let Position { line, column } = self.cursor;
        if column > 0 {
            let at = Position::new(line, column - 1);
            self.buffer.remove_char_at(at);
            self.cursor = at;
        } else if line > 0
            && let Some(join_column) = self.buffer.join_with_next(line - 1)
        {
            self.cursor = Position::new(line - 1, join_column);
        }
    }

    /// Delete the character at the cursor, pulling the next line up at the end
    /// of a line. The cursor does not move.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        self.selection = None;

        let Position { line, column } = self.cursor;
        if column < self.buffer.line_len(line) {
            self.buffer.remove_char_at(self.cursor);
        } else {
            self.buffer.join_with_next(line);
        }
    }

    /// Break the line at the cursor (Enter).
    ///
    /// With a selection, the selection is removed and no line break is added.
    pub fn split_line(&mut self) {
        if self.delete_selection() {
            return;
        }
        self.selection = None;
        self.cursor = self.buffer.split_line_at(self.cursor);
    }

    /// Insert the indent string (Tab)
    pub fn indent(&mut self) {
        self.insert_text(INDENT);
    }
}
