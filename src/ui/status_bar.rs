use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::status::StatusReport;
use crate::style::TextStyle;

/// Status bar widget
pub struct StatusBar<'a> {
    report: StatusReport<'a>,
    style: Option<&'a TextStyle>,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(report: StatusReport<'a>) -> Self {
        Self {
            report,
            style: None,
            message: None,
        }
    }

    /// Also show the current text style flags
    pub fn with_style(mut self, style: &'a TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(message) = self.message {
            let message_line = Line::from(vec![Span::styled(
                format!(" ⚠ {} ", message),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]);
            let paragraph = Paragraph::new(message_line).block(Block::default().bg(Color::Yellow));
            paragraph.render(area, buf);
            return;
        }

        let (line, column) = self.report.cursor_label();
        let position = format!(" Line: {}, Column: {} ", line, column);

        let counts = format!(
            " Words: {} │ Chars: {} │ Lines: {} ",
            self.report.word_count(),
            self.report.character_count(),
            self.report.line_count()
        );

        let selection = self
            .report
            .selection_label()
            .map(|len| format!(" Selection: {} chars ", len));

        let style_text = self.style.map(|s| format!(" {} ", s.describe()));

        let separator = "│";

        let mut spans = vec![Span::styled(
            position.clone(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(selection) = &selection {
            spans.push(Span::styled(
                selection.clone(),
                Style::default().fg(Color::Black).bg(Color::Magenta),
            ));
        }

        let used_width = position.width()
            + selection.as_ref().map_or(0, |s| s.width())
            + style_text.as_ref().map_or(0, |s| s.width() + separator.width())
            + counts.width();
        let padding = (area.width as usize).saturating_sub(used_width);

        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(Color::DarkGray),
        ));

        if let Some(style_text) = style_text {
            spans.push(Span::styled(
                style_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                separator,
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            ));
        }

        spans.push(Span::styled(
            counts,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));

        let status_line = Line::from(spans);

        let paragraph = Paragraph::new(status_line).block(Block::default().bg(Color::DarkGray));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorState;

    fn render(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_status_bar_shows_counts() {
        let editor = EditorState::from_text("one two\nthree");
        let text = render(StatusBar::new(StatusReport::new(&editor)), 80);
        assert!(text.starts_with(" Line: 1, Column: 1 "));
        assert!(text.trim_end().ends_with("Words: 3 │ Chars: 12 │ Lines: 2"));
        assert!(!text.contains("Selection"));
    }

    #[test]
    fn test_status_bar_shows_selection_and_style() {
        let mut editor = EditorState::from_text("one two");
        editor.select_all();
        editor.style_mut().toggle_bold();
        let text = render(
            StatusBar::new(StatusReport::new(&editor)).with_style(editor.style()),
            100,
        );
        assert!(text.contains("Line: 1, Column: 8"));
        assert!(text.contains("Selection: 7 chars"));
        assert!(text.contains("bold 12pt Arial"));
    }

    #[test]
    fn test_status_bar_message_replaces_status() {
        let editor = EditorState::new();
        let text = render(
            StatusBar::new(StatusReport::new(&editor)).with_message("Clipboard is unavailable"),
            60,
        );
        assert!(text.contains("Clipboard is unavailable"));
        assert!(!text.contains("Line:"));
    }
}
