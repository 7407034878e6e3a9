use plain_edit::clipboard::MemoryClipboard;
use plain_edit::editor::ClipboardOperations;
use plain_edit::{EditorState, Position};

const SAMPLES: &[&str] = &[
    "",
    "abc",
    "abc\ndef",
    "hello world\n\nlast line",
    "  indented\n\ttab\n日本語 text\n",
];

fn all_positions(editor: &EditorState) -> Vec<Position> {
    editor
        .lines()
        .iter()
        .enumerate()
        .flat_map(|(line, text)| {
            (0..=text.chars().count()).map(move |column| Position::new(line, column))
        })
        .collect()
}

/// Remove the text between two normalized positions of `text`
fn remove_between(text: &str, start: Position, end: Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let head: String = lines[start.line].chars().take(start.column).collect();
    let tail: String = lines[end.line].chars().skip(end.column).collect();

    let mut out: Vec<String> = lines[..start.line].iter().map(|s| s.to_string()).collect();
    out.push(format!("{head}{tail}"));
    out.extend(lines[end.line + 1..].iter().map(|s| s.to_string()));
    out.join("\n")
}

#[test]
fn test_document_never_empty() {
    let mut editor = EditorState::new();
    assert!(editor.buffer().line_count() >= 1);

    for text in SAMPLES {
        editor.set_text(text);
        assert!(editor.buffer().line_count() >= 1);
    }

    editor.set_text("");
    assert_eq!(editor.lines(), &[String::new()]);

    editor.select_all();
    editor.delete_selection();
    editor.backspace();
    editor.delete_forward();
    assert_eq!(editor.buffer().line_count(), 1);
}

#[test]
fn test_insert_then_backspace_restores_line() {
    for text in SAMPLES {
        for inserted in ["x", "hello", "日本", "a b c"] {
            let base = EditorState::from_text(text);
            for pos in all_positions(&base) {
                let mut editor = base.clone();
                editor.set_cursor(pos);
                editor.insert_text(inserted);
                for _ in 0..inserted.chars().count() {
                    editor.backspace();
                }
                assert_eq!(editor.get_text(), *text, "insert {inserted:?} at {pos:?}");
                assert_eq!(editor.cursor(), pos);
            }
        }
    }
}

#[test]
fn test_split_then_backspace_restores_line() {
    for text in SAMPLES {
        let base = EditorState::from_text(text);
        for pos in all_positions(&base) {
            let mut editor = base.clone();
            editor.set_cursor(pos);
            editor.split_line();
            assert_eq!(editor.cursor(), Position::new(pos.line + 1, 0));

            editor.backspace();
            assert_eq!(editor.get_text(), *text, "split at {pos:?}");
            assert_eq!(editor.cursor(), pos);
        }
    }
}

#[test]
fn test_delete_selection_removes_exact_range() {
    for text in SAMPLES {
        let base = EditorState::from_text(text);
        let positions = all_positions(&base);
        for &anchor in &positions {
            for &active in &positions {
                if anchor == active {
                    continue;
                }
                let mut editor = base.clone();
                editor.set_selection_anchor(anchor);
                editor.set_selection_active(active);
                let (start, end) = (anchor.min(active), anchor.max(active));

                assert!(editor.delete_selection());
                assert_eq!(editor.get_text(), remove_between(text, start, end));
                assert_eq!(editor.cursor(), start);
                assert!(!editor.has_selection());
            }
        }
    }
}

#[test]
fn test_select_all_covers_document() {
    for text in SAMPLES {
        let mut editor = EditorState::from_text(text);
        editor.select_all();

        let last = editor.buffer().line_count() - 1;
        let last_len = editor.lines()[last].chars().count();
        // An empty document yields an empty selection, still spanning the whole text
        assert_eq!(
            editor.selection().map(|sel| sel.normalized()),
            Some((Position::new(0, 0), Position::new(last, last_len)))
        );
        assert_eq!(editor.selected_text(), *text);
    }
}

#[test]
fn test_cursor_always_in_bounds() {
    use plain_edit::CursorMovement::*;

    let mut editor = EditorState::from_text("short\na much longer line\n\nend");
    let moves = [Down, Right, Right, Down, LineEnd, Up, Down, Down, Left, Up, LineStart, Down];
    for (i, movement) in moves.into_iter().cycle().take(60).enumerate() {
        editor.move_cursor(movement, i % 3 == 0);
        let cursor = editor.cursor();
        assert!(cursor.line < editor.buffer().line_count());
        assert!(cursor.column <= editor.buffer().line_len(cursor.line));
        if let Some(sel) = editor.selection() {
            assert_eq!(sel.active, cursor);
        }
    }
}

#[test]
fn test_scenario_split_and_join() {
    let mut editor = EditorState::from_text("abc\ndef");
    editor.set_cursor(Position::new(0, 3));

    editor.split_line();
    assert_eq!(editor.lines(), &["abc", "", "def"]);
    assert_eq!(editor.cursor(), Position::new(1, 0));

    editor.backspace();
    assert_eq!(editor.lines(), &["abc", "def"]);
    assert_eq!(editor.cursor(), Position::new(0, 3));
}

#[test]
fn test_scenario_delete_selection() {
    let mut editor = EditorState::from_text("hello world");
    editor.set_selection_anchor(Position::new(0, 0));
    editor.set_selection_active(Position::new(0, 5));

    editor.delete_selection();
    assert_eq!(editor.lines(), &[" world"]);
    assert_eq!(editor.cursor(), Position::new(0, 0));
}

#[test]
fn test_scenario_move_right_at_end() {
    let mut editor = EditorState::from_text("ab");
    editor.set_cursor(Position::new(0, 2));
    editor.move_right(false);
    assert_eq!(editor.cursor(), Position::new(0, 2));
}

#[test]
fn test_scenario_backspace_joins_lines() {
    let mut editor = EditorState::from_text("ab\ncd");
    editor.set_cursor(Position::new(1, 0));
    editor.backspace();
    assert_eq!(editor.lines(), &["abcd"]);
    assert_eq!(editor.cursor(), Position::new(0, 2));
}

#[test]
fn test_cut_paste_moves_text() {
    let mut editor = EditorState::from_text("one\ntwo\nthree");
    let mut clipboard = MemoryClipboard::new();

    editor.set_selection_anchor(Position::new(0, 3));
    editor.set_selection_active(Position::new(1, 3));
    assert!(ClipboardOperations::cut(&mut editor, &mut clipboard).unwrap());
    assert_eq!(editor.get_text(), "one\nthree");

    editor.set_cursor(Position::new(1, 5));
    assert!(ClipboardOperations::paste(&mut editor, &mut clipboard).unwrap());
    assert_eq!(editor.get_text(), "one\nthree\ntwo");
    assert_eq!(editor.cursor(), Position::new(2, 3));
}
