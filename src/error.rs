use std::path::PathBuf;

use miette::Diagnostic;

/// Clipboard failures. A failed clipboard call never changes the editor state.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    #[diagnostic(
        code(plain_edit::clipboard::unavailable),
        help("No system clipboard could be opened; is a display server running?")
    )]
    Unavailable(String),

    #[error("Failed to read from clipboard: {0}")]
    #[diagnostic(code(plain_edit::clipboard::read))]
    Read(String),

    #[error("Failed to write to clipboard: {0}")]
    #[diagnostic(code(plain_edit::clipboard::write))]
    Write(String),
}

/// Configuration file failures
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(code(plain_edit::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(
        code(plain_edit::config::parse),
        help("Run `plain-edit init-config` to regenerate a default file")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config")]
    #[diagnostic(code(plain_edit::config::serialize))]
    Serialize(#[source] toml::ser::Error),

    #[error("Failed to write config file {path}")]
    #[diagnostic(code(plain_edit::config::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
