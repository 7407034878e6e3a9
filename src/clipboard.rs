use crate::error::ClipboardError;

/// Text clipboard used by copy, cut and paste
pub trait Clipboard {
    /// Read the clipboard text
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`
///
/// The handle is opened lazily and reopened after a failure, so a clipboard
/// that appears later (e.g. a display server starting) is picked up.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Open the system clipboard right away, failing if there is none
    pub fn open() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner: Some(inner) })
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let result = self.handle()?.get_text();
        result.map_err(|e| {
            self.inner = None;
            ClipboardError::Read(e.to_string())
        })
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text.to_string());
        result.map_err(|e| {
            self.inner = None;
            ClipboardError::Write(e.to_string())
        })
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

/// In-process clipboard
///
/// Used when no system clipboard is available and in tests. Reading an empty
/// clipboard yields an empty string.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = text.to_string();
        Ok(())
    }
}

/// Open the system clipboard, falling back to an in-process one
pub fn system_or_memory() -> Box<dyn Clipboard> {
    match SystemClipboard::open() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!(error = %e, "system clipboard unavailable, using in-process clipboard");
            Box::new(MemoryClipboard::new())
        }
    }
}
