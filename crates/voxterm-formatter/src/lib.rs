//! Text-reformatting abstraction layer for VoxTerm
//!
//! This crate defines the contract with the external AI text processor:
//! the `TextFormatter` trait, its request/outcome types, and a service
//! wrapper that enforces timeouts and output limits and always falls back to
//! the original text. A failed reformat never discards the user's words.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod passthrough;
pub mod service;
pub mod types;

pub use passthrough::PassthroughFormatter;
pub use service::{FormattedText, FormattingService};
pub use types::{FormatError, FormatKind, FormatOutcome, FormatRequest};

/// Generates unique format-request IDs for log correlation.
static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique format-request ID.
pub fn next_request_id() -> u64 {
    REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Core text-reformatting interface.
///
/// Implementations call out to an AI text processor with a text-in/text-out
/// contract. They may take arbitrarily long or fail arbitrarily; the
/// `FormattingService` wrapper is responsible for bounding and recovering.
#[async_trait::async_trait]
pub trait TextFormatter: Send + Sync {
    /// Reformat the request's text according to its instructions.
    async fn format(&self, request: &FormatRequest) -> Result<FormatOutcome, FormatError>;

    /// Short formatter name for logging and diagnostics.
    fn formatter_name(&self) -> &'static str;
}
