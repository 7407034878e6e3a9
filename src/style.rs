use serde::{Deserialize, Serialize};

/// Document-global presentation flags
///
/// Carried alongside the buffer for the rendering layer. Nothing in the edit
/// state machine reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,

    #[serde(default)]
    pub italic: bool,

    #[serde(default)]
    pub underline: bool,

    /// Colour name or `#rrggbb`; `reset` uses the terminal default
    #[serde(default = "default_color")]
    pub color: String,

    /// Font family (reported only; a terminal cannot switch fonts)
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (reported only)
    #[serde(default = "default_font_size")]
    pub font_size: u16,
}

/// Colours visited by `cycle_color`, in order
pub const COLOR_PALETTE: &[&str] = &["reset", "red", "green", "yellow", "blue", "magenta", "cyan"];

/// Font families visited by `cycle_font`, in order
pub const FONT_FAMILIES: &[&str] = &["Arial", "Courier New", "Georgia", "Times New Roman", "Verdana"];

pub const MIN_FONT_SIZE: u16 = 8;
pub const MAX_FONT_SIZE: u16 = 72;
const FONT_SIZE_STEP: u16 = 2;

fn default_color() -> String {
    "reset".to_string()
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u16 {
    12
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            color: default_color(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl TextStyle {
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_font(&mut self, family: impl Into<String>, size: u16) {
        self.font_family = family.into();
        self.font_size = size;
    }

    /// Move to the next palette colour. A colour outside the palette
    /// restarts at the first entry.
    pub fn cycle_color(&mut self) {
        let next = next_in(COLOR_PALETTE, &self.color);
        self.set_color(next);
    }

    /// Move to the next font family, keeping the size
    pub fn cycle_font(&mut self) {
        let next = next_in(FONT_FAMILIES, &self.font_family);
        self.set_font(next, self.font_size);
    }

    pub fn increase_font_size(&mut self) {
        self.font_size = (self.font_size.saturating_add(FONT_SIZE_STEP)).min(MAX_FONT_SIZE);
    }

    pub fn decrease_font_size(&mut self) {
        self.font_size = (self.font_size.saturating_sub(FONT_SIZE_STEP)).max(MIN_FONT_SIZE);
    }

    /// Short description, e.g. `bold italic 12pt Arial`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.bold {
            parts.push("bold".to_string());
        }
        if self.italic {
            parts.push("italic".to_string());
        }
        if self.underline {
            parts.push("underline".to_string());
        }
        parts.push(format!("{}pt {}", self.font_size, self.font_family));
        parts.join(" ")
    }
}

fn next_in<'a>(values: &[&'a str], current: &str) -> &'a str {
    let next = values
        .iter()
        .position(|v| v.eq_ignore_ascii_case(current))
        .map_or(0, |i| (i + 1) % values.len());
    values[next]
}
