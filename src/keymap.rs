use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::EditorAction;
use crate::config::{KeyBinding, Keybindings};
use crate::document::CursorMovement;

/// Lookup table from key bindings to editor actions
///
/// Bindings are checked in declaration order, so the first match wins when a
/// configuration binds the same key twice.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, EditorAction)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_keybindings(&Keybindings::default())
    }
}

impl Keymap {
    pub fn from_keybindings(kb: &Keybindings) -> Self {
        use CursorMovement::*;
        use EditorAction as A;

        let bindings = vec![
            (kb.move_left.clone(), A::move_to(Left)),
            (kb.move_right.clone(), A::move_to(Right)),
            (kb.move_up.clone(), A::move_to(Up)),
            (kb.move_down.clone(), A::move_to(Down)),
            (kb.move_line_start.clone(), A::move_to(LineStart)),
            (kb.move_line_end.clone(), A::move_to(LineEnd)),
            (kb.select_left.clone(), A::select_to(Left)),
            (kb.select_right.clone(), A::select_to(Right)),
            (kb.select_up.clone(), A::select_to(Up)),
            (kb.select_down.clone(), A::select_to(Down)),
            (kb.select_line_start.clone(), A::select_to(LineStart)),
            (kb.select_line_end.clone(), A::select_to(LineEnd)),
            (kb.backspace.clone(), A::Backspace),
            (kb.delete_forward.clone(), A::DeleteForward),
            (kb.split_line.clone(), A::SplitLine),
            (kb.indent.clone(), A::Indent),
            (kb.select_all.clone(), A::SelectAll),
            (kb.copy.clone(), A::Copy),
            (kb.cut.clone(), A::Cut),
            (kb.paste.clone(), A::Paste),
            (kb.toggle_bold.clone(), A::ToggleBold),
            (kb.toggle_italic.clone(), A::ToggleItalic),
            (kb.toggle_underline.clone(), A::ToggleUnderline),
            (kb.cycle_color.clone(), A::CycleColor),
            (kb.cycle_font.clone(), A::CycleFont),
            (kb.font_size_up.clone(), A::IncreaseFontSize),
            (kb.font_size_down.clone(), A::DecreaseFontSize),
            (kb.clear.clone(), A::Clear),
            (kb.quit.clone(), A::Quit),
        ];

        Self { bindings }
    }

    /// Resolve a key event to an action
    ///
    /// Unbound printable characters typed without Ctrl or Alt insert
    /// themselves. Key release events are ignored.
    pub fn resolve(&self, key: &KeyEvent) -> Option<EditorAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if let Some((_, action)) = self.bindings.iter().find(|(kb, _)| kb.matches(key)) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(EditorAction::InsertChar(c))
            }
            _ => None,
        }
    }
}
