//! # Clipboard Bridge
//!
//! Atomic, OS-backed clipboard text write shared with the rest of the
//! application. The write goes through a binary-safe clipboard API so the
//! payload survives newlines, tabs, quotes, and non-ASCII content exactly.
//! No code path builds a script string containing the payload.

use crate::error::ClipboardError;
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

#[async_trait]
pub trait ClipboardBridge: Send + Sync {
    /// Replace the system clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read the current clipboard text.
    async fn read_text(&self) -> Result<String, ClipboardError>;

    fn bridge_name(&self) -> &'static str;
}

/// The OS clipboard, via `arboard`. Clipboard handles are not `Send`, so each
/// operation opens a fresh handle on a blocking thread.
pub struct SystemClipboard;

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardBridge for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let payload = text.to_string();
        let len = payload.len();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
            clipboard
                .set_text(payload)
                .map_err(|e| ClipboardError::Backend(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))??;
        debug!("Clipboard set with {} bytes", len);
        Ok(())
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        tokio::task::spawn_blocking(|| {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
            clipboard
                .get_text()
                .map_err(|e| ClipboardError::Backend(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))?
    }

    fn bridge_name(&self) -> &'static str {
        "system"
    }
}

/// In-memory clipboard for tests and headless runs. Counts writes so tests
/// can assert that rejected dispatches never touch the clipboard.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
    writes: Mutex<u64>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> u64 {
        *self.writes.lock()
    }
}

#[async_trait]
impl ClipboardBridge for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = text.to_string();
        *self.writes.lock() += 1;
        Ok(())
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.contents.lock().clone())
    }

    fn bridge_name(&self) -> &'static str {
        "memory"
    }
}
