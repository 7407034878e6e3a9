use super::Position;

/// Line separator used by `content`/`set_text`
pub const LINE_SEPARATOR: char = '\n';

/// Line store that owns the document content
///
/// Lines never contain a line separator and the store is never empty: an empty
/// document is a single empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBuffer {
    lines: Vec<String>,
}

impl DocumentBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create buffer from string
    pub fn from_text(content: &str) -> Self {
        Self {
            lines: Self::extract_lines(content),
        }
    }

    /// Replace the whole content
    pub fn set_text(&mut self, content: &str) {
        self.lines = Self::extract_lines(content);
    }

    /// Split content on the line separator, keeping a trailing empty line
    fn extract_lines(content: &str) -> Vec<String> {
        // `split` always yields at least one item, so the store is never empty
        content.split(LINE_SEPARATOR).map(str::to_string).collect()
    }

    /// Get all lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a specific line
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|s| s.as_str())
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the character count (not byte count) for a line
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map(|s| s.chars().count()).unwrap_or(0)
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Position after the last character of the document
    pub fn end_position(&self) -> Position {
        let line = self.last_line();
        Position::new(line, self.line_len(line))
    }

    /// Clamp a position into the valid range of this document
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.column.min(self.line_len(line)))
    }

    /// Replace a line's content. The index is clamped.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        let text = text.into();
        debug_assert!(!text.contains(LINE_SEPARATOR));
        let index = index.min(self.last_line());
        self.lines[index] = text;
    }

    /// Insert a new line right after `index`. The index is clamped.
    pub fn insert_line_after(&mut self, index: usize, text: impl Into<String>) {
        let text = text.into();
        debug_assert!(!text.contains(LINE_SEPARATOR));
        let index = index.min(self.last_line());
        self.lines.insert(index + 1, text);
    }

    /// Remove a line. Removing the only line empties it instead.
    pub fn remove_line(&mut self, index: usize) -> String {
        let index = index.min(self.last_line());
        if self.lines.len() == 1 {
            return std::mem::take(&mut self.lines[0]);
        }
        self.lines.remove(index)
    }

    /// Sum of line lengths in characters, separators excluded
    pub fn total_characters(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }

    /// Number of space-delimited tokens summed over lines
    ///
    /// Every line contributes at least one token, so an empty or blank line
    /// still counts as one word.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|line| line.split(' ').count()).sum()
    }

    /// Get buffer content as string
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Convert character position to byte position for a given line
    /// Returns the byte offset in the line string for the given character position
    fn char_to_byte_idx(&self, line_idx: usize, char_pos: usize) -> usize {
        if let Some(line) = self.line(line_idx) {
            line.char_indices()
                .nth(char_pos)
                .map(|(byte_idx, _)| byte_idx)
                .unwrap_or(line.len())
        } else {
            0
        }
    }

    /// Insert single-line text at `pos` and return the position right after it
    pub(crate) fn insert_str_at(&mut self, pos: Position, text: &str) -> Position {
        debug_assert!(!text.contains(LINE_SEPARATOR));
        let pos = self.clamp(pos);
        let byte_idx = self.char_to_byte_idx(pos.line, pos.column);
        self.lines[pos.line].insert_str(byte_idx, text);
        Position::new(pos.line, pos.column + text.chars().count())
    }

    /// Remove the character at `pos`, if any
    pub(crate) fn remove_char_at(&mut self, pos: Position) -> Option<char> {
        let pos = self.clamp(pos);
        let byte_idx = self.char_to_byte_idx(pos.line, pos.column);
        let line = &mut self.lines[pos.line];
        let ch = line[byte_idx..].chars().next()?;
        line.replace_range(byte_idx..byte_idx + ch.len_utf8(), "");
        Some(ch)
    }

    /// Split the line at `pos`; the tail becomes a new line right after it.
    /// Returns the start of the new line.
    pub(crate) fn split_line_at(&mut self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        let byte_idx = self.char_to_byte_idx(pos.line, pos.column);
        let rest = self.lines[pos.line].split_off(byte_idx);
        self.lines.insert(pos.line + 1, rest);
        Position::new(pos.line + 1, 0)
    }

    /// Append line `index + 1` to line `index` and remove it.
    /// Returns the join column, or `None` if there is no next line.
    pub(crate) fn join_with_next(&mut self, index: usize) -> Option<usize> {
        if index + 1 >= self.lines.len() {
            return None;
        }
        let next = self.lines.remove(index + 1);
        let join_column = self.line_len(index);
        self.lines[index].push_str(&next);
        Some(join_column)
    }

    /// Text between two positions, lines joined by the line separator
    pub fn text_in_range(&self, start: Position, end: Position) -> String {
        let (start, end) = (self.clamp(start), self.clamp(end));
        if start >= end {
            return String::new();
        }

        let start_byte = self.char_to_byte_idx(start.line, start.column);
        let end_byte = self.char_to_byte_idx(end.line, end.column);
        if start.line == end.line {
            return self.lines[start.line][start_byte..end_byte].to_string();
        }

        let mut text = self.lines[start.line][start_byte..].to_string();
        for line in &self.lines[start.line + 1..end.line] {
            text.push(LINE_SEPARATOR);
            text.push_str(line);
        }
        text.push(LINE_SEPARATOR);
        text.push_str(&self.lines[end.line][..end_byte]);
        text
    }

    /// Remove the text between two positions in one splice and return the start
    pub(crate) fn remove_range(&mut self, start: Position, end: Position) -> Position {
        let (start, end) = (self.clamp(start), self.clamp(end));
        if start >= end {
            return start;
        }

        let start_byte = self.char_to_byte_idx(start.line, start.column);
        let end_byte = self.char_to_byte_idx(end.line, end.column);
        if start.line == end.line {
            self.lines[start.line].replace_range(start_byte..end_byte, "");
        } else {
            let tail = self.lines[end.line][end_byte..].to_string();
            let head = &mut self.lines[start.line];
            head.truncate(start_byte);
            head.push_str(&tail);
            self.lines.drain(start.line + 1..=end.line);
        }
        start
    }
}

impl Default for DocumentBuffer {
    fn default() -> Self {
        Self::new()
    }
}
