//! # VoxTerm Terminal Automation Library
//!
//! This crate provides the terminal-automation core for the VoxTerm
//! voice-dictation system: discovering running terminal-like applications,
//! enumerating their windows, and injecting text into exactly one target via
//! clipboard-plus-keystroke automation under strict mutual exclusion.
//!
//! ## Channel Support Matrix
//!
//! | Channel  | Mechanism                        | Status |
//! |----------|----------------------------------|--------|
//! | Script   | System Events scripting bridge   | Stable |
//! | NoOp     | Inert fallback                   | Stable |
//!
//! The scripting bridge is used for control actions only (activate, raise
//! window, send a generic paste keystroke). Payload text never passes through
//! a script: the binary-safe clipboard bridge carries all untrusted data.

pub mod catalog;
pub mod clipboard;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod inspector;
pub mod metrics;
pub mod noop_channel;
pub mod permission;
pub mod recency;
pub mod script_channel;
pub mod subprocess;
pub mod types;
pub mod windows;

#[cfg(test)]
mod tests;

// Re-export key components for easy access
pub use catalog::TerminalCatalog;
pub use clipboard::{ClipboardBridge, MemoryClipboard, SystemClipboard};
pub use dispatcher::InjectionDispatcher;
pub use error::{AutomationError, ClipboardError};
pub use gate::PasteGate;
pub use inspector::ProcessInspector;
pub use metrics::DispatchMetrics;
pub use noop_channel::NoOpChannel;
pub use permission::{classify, PermissionVerdict};
pub use recency::FrontmostTracker;
pub use script_channel::ScriptChannel;
pub use types::{
    AutomationConfig, DispatchProfile, MatchPolicy, PasteRequest, PasteResult, PasteTarget,
    TerminalApp, TerminalWindow,
};
pub use windows::WindowEnumerator;

/// Trait defining the generic OS automation channel.
///
/// All operations address applications by process name or application id and
/// are limited to control actions; none of them carries payload text. The
/// channel works uniformly across native and non-native UI toolkits because
/// it goes through the OS accessibility/automation layer rather than a
/// toolkit-specific API.
#[async_trait::async_trait]
pub trait AutomationChannel: Send + Sync {
    /// Whether a process with the given name is currently running.
    async fn is_process_running(&self, process_name: &str) -> Result<bool, AutomationError>;

    /// Titles of the named process's open windows, in enumeration order.
    async fn list_window_titles(&self, process_name: &str) -> Result<Vec<String>, AutomationError>;

    /// Bring the application with the given id to the foreground.
    async fn activate_app(&self, app_id: &str) -> Result<(), AutomationError>;

    /// Raise the window whose title matches `window_name` under the given
    /// match policy.
    async fn raise_window(
        &self,
        process_name: &str,
        window_name: &str,
        policy: types::MatchPolicy,
    ) -> Result<(), AutomationError>;

    /// Send the platform paste keystroke to the focused application.
    async fn send_paste_keystroke(&self) -> Result<(), AutomationError>;

    /// Send the platform confirm/enter keystroke to the focused application.
    async fn send_confirm_keystroke(&self) -> Result<(), AutomationError>;

    /// Name of the process currently frontmost, if it can be determined.
    async fn frontmost_process_name(&self) -> Result<String, AutomationError>;

    /// Short channel name for logging and diagnostics.
    fn channel_name(&self) -> &'static str;
}
