//! # Error types for the terminal automation crate.
//!
//! Structured errors for the automation channel and the clipboard bridge.
//! Nothing in this module escapes the dispatcher boundary: every failure is
//! converted into a `PasteResult` before it reaches a caller.

use thiserror::Error;

/// The primary error type for OS automation operations.
#[derive(Debug, Error)]
pub enum AutomationError {
    /// The automation tool could not be launched at all.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An automation call exceeded its time budget and was killed.
    #[error("{program} timed out after {elapsed_ms}ms during '{phase}'")]
    Timeout {
        program: &'static str,
        phase: &'static str,
        elapsed_ms: u64,
    },

    /// The automation tool ran but reported failure. `detail` carries the
    /// tool's error text for permission classification.
    #[error("{program} failed during '{phase}': {detail}")]
    CommandFailed {
        program: &'static str,
        phase: &'static str,
        detail: String,
    },

    /// The automation tool produced output that was not valid UTF-8.
    #[error("{program} produced invalid UTF-8 output")]
    InvalidUtf8 { program: &'static str },

    /// A clipboard operation failed.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Errors that can occur during clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The OS clipboard backend rejected the operation.
    #[error("Clipboard backend error: {0}")]
    Backend(String),

    /// The blocking clipboard task was cancelled or panicked.
    #[error("Clipboard task failed: {0}")]
    Task(String),
}
