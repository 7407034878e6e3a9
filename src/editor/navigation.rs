use crate::document::{CursorMovement, Position, Selection};

use super::EditorState;

/// Cursor navigation and selection updates
impl EditorState {
    /// Move the cursor, extending or collapsing the selection.
    ///
    /// Without `extend`, a horizontal move over a non-empty selection collapses
    /// it to its start (left) or end (right) instead of moving further. With
    /// `extend`, the selection keeps its anchor (the cursor before the first
    /// extending move) and its active end follows the cursor.
    pub fn move_cursor(&mut self, movement: CursorMovement, extend: bool) {
        if !extend
            && let Some((start, end)) = self.normalized_selection()
        {
            match movement {
                CursorMovement::Left => {
                    self.collapse_to(start);
                    return;
                }
                CursorMovement::Right => {
                    self.collapse_to(end);
                    return;
                }
                _ => {}
            }
        }

        let before = self.cursor;
        self.cursor = self.target_of(movement);

        if extend {
            let anchor = self.selection.map(|sel| sel.anchor).unwrap_or(before);
            self.selection = Some(Selection::new(anchor, self.cursor));
        } else {
            self.selection = None;
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        self.move_cursor(CursorMovement::Left, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        self.move_cursor(CursorMovement::Right, extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.move_cursor(CursorMovement::Up, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.move_cursor(CursorMovement::Down, extend);
    }

    /// Where the cursor lands after `movement`; document edges are no-ops
    fn target_of(&self, movement: CursorMovement) -> Position {
        let Position { line, column } = self.cursor;
        match movement {
            CursorMovement::Left => {
                if column > 0 {
                    Position::new(line, column - 1)
                } else if line > 0 {
                    // Move to end of previous line
                    Position::new(line - 1, self.buffer.line_len(line - 1))
                } else {
                    self.cursor
                }
            }
            CursorMovement::Right => {
                if column < self.buffer.line_len(line) {
                    Position::new(line, column + 1)
                } else if line + 1 < self.buffer.line_count() {
                    // Move to start of next line
                    Position::new(line + 1, 0)
                } else {
                    self.cursor
                }
            }
            CursorMovement::Up => {
                if line > 0 {
                    Position::new(line - 1, column.min(self.buffer.line_len(line - 1)))
                } else {
                    self.cursor
                }
            }
            CursorMovement::Down => {
                if line + 1 < self.buffer.line_count() {
                    Position::new(line + 1, column.min(self.buffer.line_len(line + 1)))
                } else {
                    self.cursor
                }
            }
            CursorMovement::LineStart => Position::new(line, 0),
            CursorMovement::LineEnd => Position::new(line, self.buffer.line_len(line)),
        }
    }

    fn collapse_to(&mut self, pos: Position) {
        self.cursor = pos;
        self.selection = None;
    }

    /// Select the whole document; the cursor moves to its end
    pub fn select_all(&mut self) {
        let end = self.buffer.end_position();
        self.selection = Some(Selection::new(Position::origin(), end));
        self.cursor = end;
    }

    /// Place the cursor and drop the selection. The position is clamped.
    pub fn set_cursor(&mut self, pos: Position) {
        self.collapse_to(self.buffer.clamp(pos));
    }

    /// Start a selection at `pos` (pointer-down). The position is clamped.
    pub fn set_selection_anchor(&mut self, pos: Position) {
        let pos = self.buffer.clamp(pos);
        self.cursor = pos;
        self.selection = Some(Selection::collapsed(pos));
    }

    /// Move the live end of the selection and the cursor to `pos` (pointer-drag).
    /// Without a selection the current cursor becomes the anchor.
    pub fn set_selection_active(&mut self, pos: Position) {
        let pos = self.buffer.clamp(pos);
        let anchor = self.selection.map(|sel| sel.anchor).unwrap_or(self.cursor);
        self.cursor = pos;
        self.selection = Some(Selection::new(anchor, pos));
    }

    /// Pointer released: an empty selection is dropped
    pub fn finish_pointer_selection(&mut self) {
        if self.selection.is_some_and(|sel| sel.is_empty()) {
            self.selection = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_at(text: &str, line: usize, column: usize) -> EditorState {
        let mut editor = EditorState::from_text(text);
        editor.set_cursor(Position::new(line, column));
        editor
    }

    fn assert_selection_follows_cursor(editor: &EditorState) {
        if let Some(sel) = editor.selection() {
            assert_eq!(sel.active, editor.cursor());
        }
    }

    #[test]
    fn test_cursor_movement() {
        let mut editor = EditorState::from_text("Line 1\nLine 2\nLine 3");

        editor.move_down(false);
        assert_eq!(editor.cursor().line, 1);

        editor.move_right(false);
        assert_eq!(editor.cursor().column, 1);

        editor.move_cursor(CursorMovement::LineEnd, false);
        assert_eq!(editor.cursor().column, 6);
    }

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let mut editor = editor_at("abc\nde", 1, 0);
        editor.move_left(false);
        assert_eq!(editor.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_move_left_at_document_start_is_noop() {
        let mut editor = editor_at("abc", 0, 0);
        editor.move_left(false);
        assert_eq!(editor.cursor(), Position::origin());
    }

    #[test]
    fn test_move_right_wraps_to_next_line_start() {
        let mut editor = editor_at("abc\nde", 0, 3);
        editor.move_right(false);
        assert_eq!(editor.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_move_right_at_document_end_is_noop() {
        let mut editor = editor_at("ab", 0, 2);
        editor.move_right(false);
        assert_eq!(editor.cursor(), Position::new(0, 2));
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut editor = editor_at("long line\nab\nanother long", 0, 8);
        editor.move_down(false);
        assert_eq!(editor.cursor(), Position::new(1, 2));
        // No sticky column: the clamped column is kept
        editor.move_down(false);
        assert_eq!(editor.cursor(), Position::new(2, 2));
    }

    #[test]
    fn test_vertical_movement_at_boundaries() {
        let mut editor = editor_at("a\nb", 0, 1);
        editor.move_up(false);
        assert_eq!(editor.cursor(), Position::new(0, 1));
        editor.move_down(false);
        editor.move_down(false);
        assert_eq!(editor.cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_cursor_movement_japanese() {
        let mut editor = EditorState::from_text("こんにちは");
        editor.move_cursor(CursorMovement::LineEnd, false);
        assert_eq!(editor.cursor().column, 5);
        editor.move_left(false);
        assert_eq!(editor.cursor().column, 4);
    }

    #[test]
    fn test_shift_extend_anchors_at_previous_cursor() {
        let mut editor = editor_at("hello", 0, 1);
        editor.move_right(true);
        editor.move_right(true);
        let sel = editor.selection().copied().unwrap();
        assert_eq!(sel.anchor, Position::new(0, 1));
        assert_eq!(sel.active, Position::new(0, 3));
        assert_eq!(editor.selected_text(), "el");
        assert_selection_follows_cursor(&editor);
    }

    #[test]
    fn test_extend_back_past_anchor() {
        let mut editor = editor_at("hello", 0, 2);
        editor.move_right(true);
        editor.move_left(true);
        // Back on the anchor: selection exists but is empty
        assert!(editor.selection().is_some());
        assert!(!editor.has_selection());

        editor.move_left(true);
        assert_eq!(
            editor.normalized_selection(),
            Some((Position::new(0, 1), Position::new(0, 2)))
        );
        assert_eq!(editor.selection().unwrap().anchor, Position::new(0, 2));
    }

    #[test]
    fn test_extend_vertically() {
        let mut editor = editor_at("abc\ndef", 0, 1);
        editor.move_down(true);
        assert_eq!(editor.selected_text(), "bc\nd");
        assert_selection_follows_cursor(&editor);
    }

    #[test]
    fn test_move_left_collapses_to_selection_start() {
        let mut editor = editor_at("hello world", 0, 2);
        editor.move_right(true);
        editor.move_right(true);
        editor.move_right(true);
        editor.move_left(false);
        assert_eq!(editor.cursor(), Position::new(0, 2));
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_move_right_collapses_to_selection_end_even_when_reversed() {
        let mut editor = editor_at("abc\ndef", 1, 2);
        editor.move_up(true);
        editor.move_left(true);
        assert_eq!(editor.cursor(), Position::new(0, 1));

        editor.move_right(false);
        assert_eq!(editor.cursor(), Position::new(1, 2));
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_vertical_move_without_extend_clears_selection() {
        let mut editor = editor_at("abc\ndef", 0, 0);
        editor.move_right(true);
        editor.move_down(false);
        assert_eq!(editor.cursor(), Position::new(1, 1));
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_non_extending_move_at_boundary_clears_selection() {
        let mut editor = editor_at("abc", 0, 0);
        editor.move_right(true);
        editor.move_up(false);
        assert!(editor.selection().is_none());
        assert_eq!(editor.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_select_all() {
        let mut editor = EditorState::from_text("one\ntwo\nthree");
        editor.select_all();
        assert_eq!(
            editor.normalized_selection(),
            Some((Position::new(0, 0), Position::new(2, 5)))
        );
        assert_eq!(editor.cursor(), Position::new(2, 5));
        assert_eq!(editor.selected_text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_select_all_empty_document() {
        let mut editor = EditorState::new();
        editor.select_all();
        assert!(!editor.has_selection());
        assert_selection_follows_cursor(&editor);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut editor = EditorState::from_text("abc\nde");
        editor.set_cursor(Position::new(10, 10));
        assert_eq!(editor.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_pointer_selection_lifecycle() {
        let mut editor = EditorState::from_text("hello\nworld");
        editor.set_selection_anchor(Position::new(0, 3));
        editor.set_selection_active(Position::new(1, 2));
        assert_eq!(editor.cursor(), Position::new(1, 2));
        assert_eq!(editor.selected_text(), "lo\nwo");

        editor.finish_pointer_selection();
        assert!(editor.has_selection());
    }

    #[test]
    fn test_pointer_click_without_drag_drops_selection() {
        let mut editor = EditorState::from_text("hello");
        editor.set_selection_anchor(Position::new(0, 4));
        editor.finish_pointer_selection();
        assert!(editor.selection().is_none());
        assert_eq!(editor.cursor(), Position::new(0, 4));
    }

    #[test]
    fn test_pointer_positions_are_clamped() {
        let mut editor = EditorState::from_text("ab\ncd");
        editor.set_selection_anchor(Position::new(0, 99));
        editor.set_selection_active(Position::new(99, 99));
        assert_eq!(
            editor.normalized_selection(),
            Some((Position::new(0, 2), Position::new(1, 2)))
        );
    }

    #[test]
    fn test_selection_invariant_after_every_move() {
        let mut editor = editor_at("abc\n\ndefg\nh", 1, 0);
        let moves = [
            (CursorMovement::Right, true),
            (CursorMovement::Down, true),
            (CursorMovement::Left, false),
            (CursorMovement::Up, true),
            (CursorMovement::LineEnd, true),
            (CursorMovement::Right, false),
            (CursorMovement::Down, false),
            (CursorMovement::LineStart, true),
        ];
        for (movement, extend) in moves {
            editor.move_cursor(movement, extend);
            assert_selection_follows_cursor(&editor);
            assert_eq!(editor.buffer().clamp(editor.cursor()), editor.cursor());
        }
    }
}
