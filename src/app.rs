use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};

use crate::action::EditorAction;
use crate::blink::CaretBlink;
use crate::clipboard::{self, Clipboard};
use crate::config::Config;
use crate::document::Position;
use crate::editor::{ClipboardOperations, EditorState};
use crate::error::ClipboardError;
use crate::keymap::Keymap;
use crate::status::StatusReport;
use crate::ui::EditorWidget;

/// Lines moved per mouse wheel notch
const SCROLL_STEP: usize = 3;

/// Main application state
pub struct App {
    /// Document, cursor, selection and style
    editor: EditorState,
    /// Application configuration
    config: Config,
    /// Key event to action lookup
    keymap: Keymap,
    /// Clipboard used by copy, cut and paste
    clipboard: Box<dyn Clipboard>,
    /// Caret blink phase
    blink: CaretBlink,
    /// Whether the app should quit
    should_quit: bool,
    /// Scroll offset for viewport
    scroll_offset: usize,
    /// Screen area of the editor widget from the last layout
    editor_area: Rect,
    /// Status message (for errors, info, etc.)
    status_message: Option<String>,
    /// Whether a left-button drag is selecting text
    pointer_selecting: bool,
}

impl App {
    /// Create an app showing the configured welcome text
    pub fn new(config: Config) -> Self {
        let text = config.editor.welcome_text.clone();
        Self::with_text(config, &text)
    }

    /// Create an app with `text` as the initial document
    pub fn with_text(config: Config, text: &str) -> Self {
        Self::with_clipboard(config, text, clipboard::system_or_memory())
    }

    pub fn with_clipboard(config: Config, text: &str, clipboard: Box<dyn Clipboard>) -> Self {
        let editor = EditorState::from_text(text).with_style(config.style.clone());
        let keymap = Keymap::from_keybindings(&config.keybindings);
        let blink = CaretBlink::new(
            Duration::from_millis(config.editor.caret_blink_ms),
            Instant::now(),
        );

        Self {
            editor,
            config,
            keymap,
            clipboard,
            blink,
            should_quit: false,
            scroll_offset: 0,
            editor_area: Rect::default(),
            status_message: None,
            pointer_selecting: false,
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn status(&self) -> StatusReport<'_> {
        StatusReport::new(&self.editor)
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// The caret is drawn only in its visible phase and never over a selection
    pub fn caret_visible(&self) -> bool {
        self.blink.is_visible() && !self.editor.has_selection()
    }

    /// Editor widget configured for the current view
    pub fn editor_widget(&self) -> EditorWidget<'_> {
        EditorWidget::new(&self.editor)
            .with_scroll(self.scroll_offset)
            .with_line_numbers(self.config.editor.show_line_numbers)
    }

    /// Record where the editor is drawn. A height change pulls the cursor
    /// back into view; an unchanged layout keeps any wheel scrolling.
    pub fn set_editor_area(&mut self, area: Rect) {
        let resized = area.height != self.editor_area.height;
        self.editor_area = area;
        if resized {
            self.adjust_scroll();
        }
    }

    /// Advance the caret blink. Returns `true` if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.blink.tick(now)
    }

    /// How long the event loop may wait before the next blink toggle
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.blink
            .time_to_next_toggle(now)
            .map_or(max, |next| next.min(max))
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.keymap.resolve(&key) {
            // Clear status message on any handled key press
            self.clear_status_message();
            self.dispatch(action);
        }
    }

    /// Handle paste event (bracketed paste from the terminal)
    pub fn handle_paste(&mut self, text: &str) {
        self.clear_status_message();
        self.editor.insert_text(text);
        self.after_change();
    }

    /// Terminal focus changes: the caret holds still while unfocused
    pub fn handle_focus(&mut self, gained: bool) {
        if gained {
            self.blink.start(Instant::now());
        } else {
            self.blink.stop();
        }
    }

    /// Handle mouse input: left button selects, the wheel scrolls
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let cell = ScreenPosition::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.editor_area.contains(cell) => {
                let pos = self.hit_test(mouse.column, mouse.row);
                self.editor.set_selection_anchor(pos);
                self.pointer_selecting = true;
                self.after_change();
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pointer_selecting => {
                let pos = self.hit_test(mouse.column, mouse.row);
                self.editor.set_selection_active(pos);
                self.after_change();
            }
            MouseEventKind::Up(MouseButton::Left) if self.pointer_selecting => {
                self.pointer_selecting = false;
                self.editor.finish_pointer_selection();
                self.after_change();
            }
            MouseEventKind::ScrollDown => {
                let max = self.editor.buffer().last_line();
                self.scroll_offset = (self.scroll_offset + SCROLL_STEP).min(max);
            }
            MouseEventKind::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(SCROLL_STEP);
            }
            _ => {}
        }
    }

    /// Run one editor action
    pub fn dispatch(&mut self, action: EditorAction) {
        tracing::trace!(?action, "dispatch");

        let result = match action {
            EditorAction::Quit => {
                self.should_quit = true;
                return;
            }
            EditorAction::Copy => ClipboardOperations::copy(&self.editor, self.clipboard.as_mut()),
            EditorAction::Cut => ClipboardOperations::cut(&mut self.editor, self.clipboard.as_mut()),
            EditorAction::Paste => {
                ClipboardOperations::paste(&mut self.editor, self.clipboard.as_mut())
            }
            _ => Ok(self.editor.apply(action)),
        };

        if let Err(e) = result {
            self.report_clipboard_error(action, e);
        }
        self.after_change();
    }

    fn report_clipboard_error(&mut self, action: EditorAction, error: ClipboardError) {
        tracing::warn!(?action, %error, "clipboard operation failed");
        self.set_status_message(error.to_string());
    }

    fn after_change(&mut self) {
        self.blink.reset(Instant::now());
        self.adjust_scroll();
    }

    fn hit_test(&self, x: u16, y: u16) -> Position {
        self.editor_widget().position_at(self.editor_area, x, y)
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        let cursor_line = self.editor.cursor().line;
        let viewport_height = (self.editor_area.height as usize).max(1);

        // Scroll down if cursor is below viewport
        if cursor_line >= self.scroll_offset + viewport_height {
            self.scroll_offset = cursor_line - viewport_height + 1;
        }

        // Scroll up if cursor is above viewport
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        }
    }
}
