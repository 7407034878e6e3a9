use std::str::FromStr;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::document::Position;
use crate::editor::EditorState;
use crate::style::TextStyle;

/// Editor widget for rendering the document
///
/// Also answers the geometry questions the input layer needs: where the caret
/// lands on screen and which document position a mouse cell points at.
pub struct EditorWidget<'a> {
    editor: &'a EditorState,
    scroll_offset: usize,
    show_line_numbers: bool,
}

impl<'a> EditorWidget<'a> {
    pub fn new(editor: &'a EditorState) -> Self {
        Self {
            editor,
            scroll_offset: 0,
            show_line_numbers: true,
        }
    }

    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    pub fn with_scroll(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Calculate visible line range based on viewport
    fn visible_range(&self, height: usize) -> (usize, usize) {
        let line_count = self.editor.buffer().line_count();
        let start = self.scroll_offset.min(line_count);
        let end = (start + height).min(line_count);
        (start, end)
    }

    /// Create a line number span
    fn make_line_number_span(
        &self,
        line_idx: usize,
        width: usize,
        is_current: bool,
    ) -> Span<'static> {
        let line_num = line_idx + 1;
        let formatted = format!("{:>width$} │ ", line_num, width = width);
        let style = if is_current {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(formatted, style)
    }

    /// Calculate the width needed for line numbers
    fn line_number_width(&self) -> usize {
        let total_lines = self.editor.buffer().line_count();
        total_lines.to_string().len().max(3)
    }

    /// Columns taken by the line number gutter
    pub fn gutter_width(&self) -> u16 {
        if self.show_line_numbers {
            // digits + " │ "
            (self.line_number_width() + 3) as u16
        } else {
            0
        }
    }

    /// Screen cell of the caret, or `None` when it is scrolled out of `area`
    pub fn cursor_screen_position(&self, area: Rect) -> Option<(u16, u16)> {
        let cursor = self.editor.cursor();
        let (start, end) = self.visible_range(area.height as usize);
        if cursor.line < start || cursor.line >= end {
            return None;
        }

        let text = self.editor.buffer().line(cursor.line).unwrap_or("");
        let prefix_width = display_width_before(text, cursor.column);
        let x = area.x as usize + self.gutter_width() as usize + prefix_width;
        if x >= area.right() as usize {
            return None;
        }
        let y = area.y as usize + (cursor.line - start);
        Some((x as u16, y as u16))
    }

    /// Document position under the screen cell `(x, y)`
    ///
    /// Cells outside the text clamp to the nearest valid position; rows below
    /// the last line map to the end of the document.
    pub fn position_at(&self, area: Rect, x: u16, y: u16) -> Position {
        let buffer = self.editor.buffer();
        let row = y.saturating_sub(area.y) as usize;
        let line = self.scroll_offset + row;
        if line > buffer.last_line() {
            return buffer.end_position();
        }

        let text = buffer.line(line).unwrap_or("");
        let display_x = x
            .saturating_sub(area.x)
            .saturating_sub(self.gutter_width()) as usize;
        Position::new(line, column_at_display_x(text, display_x))
    }

    fn render_line(&self, line_idx: usize, base: Style) -> Vec<Span<'a>> {
        let text = self.editor.buffer().line(line_idx).unwrap_or("");
        let selected = if self.editor.has_selection() {
            self.editor
                .selection()
                .and_then(|sel| sel.columns_on_line(line_idx, text.chars().count()))
        } else {
            None
        };

        let Some((from, to)) = selected else {
            return vec![Span::styled(text, base)];
        };

        let highlight = base.add_modifier(Modifier::REVERSED);
        let from_byte = byte_offset(text, from);
        let to_byte = byte_offset(text, to);
        let mut spans = vec![
            Span::styled(&text[..from_byte], base),
            Span::styled(&text[from_byte..to_byte], highlight),
            Span::styled(&text[to_byte..], base),
        ];

        // The line separator is part of the selection on every line but the last
        if let Some((_, end)) = self.editor.normalized_selection()
            && line_idx < end.line
        {
            spans.insert(2, Span::styled(" ", highlight));
        }
        spans
    }
}

impl Widget for EditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (start, end) = self.visible_range(area.height as usize);
        let cursor_line = self.editor.cursor().line;
        let line_num_width = self.line_number_width();
        let base = text_style(self.editor.style());

        let mut lines = Vec::with_capacity(end - start);
        for line_idx in start..end {
            let mut spans = Vec::new();
            if self.show_line_numbers {
                spans.push(self.make_line_number_span(
                    line_idx,
                    line_num_width,
                    line_idx == cursor_line,
                ));
            }
            spans.extend(self.render_line(line_idx, base));
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

/// Terminal style for the document-global text flags
///
/// Unknown colour names fall back to the terminal default.
pub fn text_style(style: &TextStyle) -> Style {
    let color = Color::from_str(&style.color).unwrap_or(Color::Reset);
    let mut out = Style::default().fg(color);
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.underline {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn display_width_before(text: &str, column: usize) -> usize {
    text[..byte_offset(text, column)].width()
}

/// Char column whose boundary is nearest to display offset `x`
///
/// Clicking the left half of a wide character places the caret before it,
/// the right half after it.
pub fn column_at_display_x(text: &str, x: usize) -> usize {
    let mut acc = 0;
    for (idx, ch) in text.chars().enumerate() {
        let width = ch.width().unwrap_or(0);
        if x < acc + width.div_ceil(2) {
            return idx;
        }
        acc += width;
    }
    text.chars().count()
}
