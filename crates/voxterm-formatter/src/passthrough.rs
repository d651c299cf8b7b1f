use crate::types::{FormatError, FormatOutcome, FormatRequest};
use crate::TextFormatter;
use async_trait::async_trait;
use tracing::trace;

/// A formatter that returns its input unchanged. Used when reformatting is
/// disabled in configuration.
pub struct PassthroughFormatter;

impl Default for PassthroughFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PassthroughFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextFormatter for PassthroughFormatter {
    async fn format(&self, request: &FormatRequest) -> Result<FormatOutcome, FormatError> {
        trace!(
            "PassthroughFormatter: returning {} bytes unchanged",
            request.text.len()
        );
        Ok(FormatOutcome {
            formatted: request.text.clone(),
        })
    }

    fn formatter_name(&self) -> &'static str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_returns_input_unchanged() {
        let formatter = PassthroughFormatter::new();
        let out = formatter
            .format(&FormatRequest::transcript("as dictated"))
            .await
            .unwrap();
        assert_eq!(out.formatted, "as dictated");
    }
}
