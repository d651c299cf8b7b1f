use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What kind of output is being requested; drives the timeout budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatKind {
    /// Full reformatting of a dictated transcript.
    Transcript,
    /// Short title generation (e.g. for history entries).
    Title,
}

/// One reformatting request.
#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub text: String,
    /// Optional user instructions steering the reformat.
    pub instructions: Option<String>,
    /// Optional model override; the collaborator picks its default otherwise.
    pub model: Option<String>,
    pub kind: FormatKind,
}

impl FormatRequest {
    pub fn transcript(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            instructions: None,
            model: None,
            kind: FormatKind::Transcript,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            instructions: None,
            model: None,
            kind: FormatKind::Title,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Successful formatter output.
#[derive(Debug, Clone)]
pub struct FormatOutcome {
    pub formatted: String,
}

/// Failures at the formatter seam. All of these are recoverable: the service
/// falls back to the original text.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Formatter timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("Formatting tool not found: {0}")]
    ToolUnavailable(String),

    #[error("Formatter output of {size} bytes exceeds the {limit} byte limit")]
    OutputTooLarge { size: usize, limit: usize },

    #[error("Formatting failed: {0}")]
    Failed(String),
}
