//! # Formatting Service
//!
//! Enforces the collaborator contract around any `TextFormatter`: an
//! upper-bound timeout per request kind, a maximum output size, and the
//! fallback rule that every failure returns the original text, so the user's
//! words are never lost to a misbehaving formatter.

use crate::types::{FormatError, FormatKind, FormatRequest};
use crate::{next_request_id, TextFormatter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout for full transcript reformatting.
pub const TRANSCRIPT_TIMEOUT_SECS: u64 = 60;

/// Timeout for short title generation.
pub const TITLE_TIMEOUT_SECS: u64 = 15;

/// Maximum accepted formatter output.
pub const MAX_OUTPUT_BYTES: usize = 1024 * 1024;

/// Formatter output as delivered to callers. When `fallback` is set, `text`
/// is the original input and `error` says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub text: String,
    pub fallback: bool,
    pub error: Option<String>,
}

pub struct FormattingService {
    formatter: Arc<dyn TextFormatter>,
}

impl FormattingService {
    pub fn new(formatter: Arc<dyn TextFormatter>) -> Self {
        Self { formatter }
    }

    fn timeout_for(kind: FormatKind) -> Duration {
        match kind {
            FormatKind::Transcript => Duration::from_secs(TRANSCRIPT_TIMEOUT_SECS),
            FormatKind::Title => Duration::from_secs(TITLE_TIMEOUT_SECS),
        }
    }

    /// Run one request through the formatter under the contract's bounds.
    pub async fn format(&self, request: FormatRequest) -> FormattedText {
        let request_id = next_request_id();
        let budget = Self::timeout_for(request.kind);
        debug!(
            request_id,
            formatter = self.formatter.formatter_name(),
            kind = ?request.kind,
            "formatting {} bytes",
            request.text.len()
        );

        let attempt = tokio::time::timeout(budget, self.formatter.format(&request)).await;
        let result = match attempt {
            Ok(Ok(outcome)) => {
                if outcome.formatted.len() > MAX_OUTPUT_BYTES {
                    Err(FormatError::OutputTooLarge {
                        size: outcome.formatted.len(),
                        limit: MAX_OUTPUT_BYTES,
                    })
                } else {
                    Ok(outcome.formatted)
                }
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(FormatError::Timeout {
                elapsed_ms: budget.as_millis() as u64,
            }),
        };

        match result {
            Ok(text) => FormattedText {
                text,
                fallback: false,
                error: None,
            },
            Err(e) => {
                warn!(request_id, "formatting failed, using original text: {}", e);
                FormattedText {
                    text: request.text,
                    fallback: true,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
