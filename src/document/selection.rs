use super::Position;

/// Selection range between an anchor and a live (active) end
///
/// The pair is kept in the order the user produced it; `normalized` derives the
/// document-ordered view on demand so the active end survives further
/// extension in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection began
    pub anchor: Position,
    /// The end that follows the cursor
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Collapsed selection at a single position
    pub fn collapsed(at: Position) -> Self {
        Self::new(at, at)
    }

    /// An empty selection is treated as no selection by every consumer
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Returns `(start, end)` ordered by (line, column)
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Column range covered on `line`, or `None` if the line is outside the selection.
    /// `line_len` is the character length of that line.
    pub fn columns_on_line(&self, line: usize, line_len: usize) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        let (start, end) = self.normalized();
        if line < start.line || line > end.line {
            return None;
        }
        let from = if line == start.line { start.column } else { 0 };
        let to = if line == end.line { end.column } else { line_len };
        Some((from.min(line_len), to.min(line_len)))
    }
}
