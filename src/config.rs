use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::style::TextStyle;

fn default_true() -> bool {
    true
}

fn default_caret_blink_ms() -> u64 {
    500
}

fn default_welcome_text() -> String {
    "Welcome to plain-edit!".to_string()
}

/// Editor display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Show line numbers in the editor
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Caret blink interval in milliseconds; 0 disables blinking
    #[serde(default = "default_caret_blink_ms")]
    pub caret_blink_ms: u64,

    /// Initial document when no text is given on the command line
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            caret_blink_ms: default_caret_blink_ms(),
            welcome_text: default_welcome_text(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub style: TextStyle,
    #[serde(default)]
    pub keybindings: Keybindings,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path` or use defaults
    ///
    /// A missing file is silently replaced by defaults; a broken one is logged.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    /// Load configuration from default location or use defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::default_config_path())
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("plain-edit").join("config.toml")
        } else {
            PathBuf::from(".plain-edit.toml")
        }
    }
}

/// Keybindings configuration, one binding per editor action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keybindings {
    pub move_left: KeyBinding,
    pub move_right: KeyBinding,
    pub move_up: KeyBinding,
    pub move_down: KeyBinding,
    pub move_line_start: KeyBinding,
    pub move_line_end: KeyBinding,

    pub select_left: KeyBinding,
    pub select_right: KeyBinding,
    pub select_up: KeyBinding,
    pub select_down: KeyBinding,
    pub select_line_start: KeyBinding,
    pub select_line_end: KeyBinding,

    pub backspace: KeyBinding,
    pub delete_forward: KeyBinding,
    pub split_line: KeyBinding,
    pub indent: KeyBinding,

    pub select_all: KeyBinding,
    pub copy: KeyBinding,
    pub cut: KeyBinding,
    pub paste: KeyBinding,

    pub toggle_bold: KeyBinding,
    /// Most terminals report Ctrl+I as Tab; rebind if italic never toggles
    pub toggle_italic: KeyBinding,
    pub toggle_underline: KeyBinding,
    pub cycle_color: KeyBinding,
    pub cycle_font: KeyBinding,
    pub font_size_up: KeyBinding,
    pub font_size_down: KeyBinding,

    /// Replace the document with an empty one (default: Ctrl+L)
    pub clear: KeyBinding,

    /// Quit application (default: Ctrl+Q)
    pub quit: KeyBinding,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            move_left: KeyBinding::plain("left"),
            move_right: KeyBinding::plain("right"),
            move_up: KeyBinding::plain("up"),
            move_down: KeyBinding::plain("down"),
            move_line_start: KeyBinding::plain("home"),
            move_line_end: KeyBinding::plain("end"),

            select_left: KeyBinding::new("left", &["shift"]),
            select_right: KeyBinding::new("right", &["shift"]),
            select_up: KeyBinding::new("up", &["shift"]),
            select_down: KeyBinding::new("down", &["shift"]),
            select_line_start: KeyBinding::new("home", &["shift"]),
            select_line_end: KeyBinding::new("end", &["shift"]),

            backspace: KeyBinding::plain("backspace"),
            delete_forward: KeyBinding::plain("delete"),
            split_line: KeyBinding::plain("enter"),
            indent: KeyBinding::plain("tab"),

            select_all: KeyBinding::new("a", &["ctrl"]),
            copy: KeyBinding::new("c", &["ctrl"]),
            cut: KeyBinding::new("x", &["ctrl"]),
            paste: KeyBinding::new("v", &["ctrl"]),

            toggle_bold: KeyBinding::new("b", &["ctrl"]),
            toggle_italic: KeyBinding::new("i", &["ctrl"]),
            toggle_underline: KeyBinding::new("u", &["ctrl"]),
            cycle_color: KeyBinding::new("c", &["alt"]),
            cycle_font: KeyBinding::new("f", &["alt"]),
            font_size_up: KeyBinding::new("=", &["alt"]),
            font_size_down: KeyBinding::new("-", &["alt"]),

            clear: KeyBinding::new("l", &["ctrl"]),
            quit: KeyBinding::new("q", &["ctrl"]),
        }
    }
}

/// Represents a key binding with modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub code: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl KeyBinding {
    pub fn new(code: &str, modifiers: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Binding without modifiers
    pub fn plain(code: &str) -> Self {
        Self::new(code, &[])
    }

    /// Check if this keybinding matches a KeyEvent
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match self.code.to_lowercase().as_str() {
            "esc" => matches!(key.code, KeyCode::Esc),
            "enter" => matches!(key.code, KeyCode::Enter),
            "backspace" => matches!(key.code, KeyCode::Backspace),
            "delete" | "del" => matches!(key.code, KeyCode::Delete),
            "tab" => matches!(key.code, KeyCode::Tab),
            "space" => matches!(key.code, KeyCode::Char(' ')),
            "left" => matches!(key.code, KeyCode::Left),
            "right" => matches!(key.code, KeyCode::Right),
            "up" => matches!(key.code, KeyCode::Up),
            "down" => matches!(key.code, KeyCode::Down),
            "home" => matches!(key.code, KeyCode::Home),
            "end" => matches!(key.code, KeyCode::End),
            s if s.len() > 1 && s.starts_with('f') => match s[1..].parse::<u8>() {
                Ok(n) => key.code == KeyCode::F(n),
                Err(_) => false,
            },
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    matches!(key.code, KeyCode::Char(c) if c.to_lowercase().eq(ch.to_lowercase()))
                } else {
                    false
                }
            }
            _ => false,
        };

        if !code_matches {
            return false;
        }

        key.modifiers == self.expected_modifiers()
    }

    fn expected_modifiers(&self) -> KeyModifiers {
        let mut expected = KeyModifiers::empty();
        for modifier in &self.modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => expected |= KeyModifiers::CONTROL,
                "shift" => expected |= KeyModifiers::SHIFT,
                "alt" => expected |= KeyModifiers::ALT,
                _ => {}
            }
        }
        expected
    }

    /// Get a human-readable representation of the keybinding
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        for modifier in &self.modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => parts.push("Ctrl".to_string()),
                "shift" => parts.push("Shift".to_string()),
                "alt" => parts.push("Alt".to_string()),
                _ => parts.push(modifier.clone()),
            }
        }

        parts.push(self.code.to_uppercase());
        parts.join("+")
    }
}
