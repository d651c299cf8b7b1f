//! # Core Data Types for Terminal Automation
//!
//! This module defines the data structures shared across the crate:
//! catalog entries, enumerated windows, dispatch requests and results, and
//! the runtime configuration struct.

use serde::{Deserialize, Serialize};

/// One entry of the terminal catalog: a terminal-like application the
/// dispatcher knows how to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalApp {
    /// OS process name, as reported by the automation layer.
    pub process_name: String,
    /// Platform-stable application identifier (bundle/package id).
    pub app_id: String,
    /// Human-readable name for UI presentation.
    pub display_name: String,
}

/// A window belonging to a running terminal application.
///
/// Recomputed on every enumeration call; titles can change between calls, so
/// these values are never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalWindow {
    /// Owning application's process name.
    pub process_name: String,
    /// Owning application's identifier.
    pub app_id: String,
    /// Full window title as reported by the OS. Never truncated; this is the
    /// value used for window targeting.
    pub window_name: String,
    /// 1-based ordinal among the app's windows, in enumeration order. Not
    /// stable across calls.
    pub index: usize,
    /// Title truncated for UI presentation.
    pub display_name: String,
}

/// Optional dispatch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteTarget {
    /// Application identifier to activate.
    pub app_id: String,
    /// Specific window title to raise, if any.
    pub window_name: Option<String>,
}

/// One injection request. Ephemeral; exists only for the duration of a single
/// dispatch call.
#[derive(Debug, Clone)]
pub struct PasteRequest {
    pub text: String,
    pub target: Option<PasteTarget>,
}

/// Outcome of a dispatch call.
///
/// The three booleans are independent: `copied` is a soft-success signal
/// meaning the payload reached the clipboard even if the automation sequence
/// failed afterwards, so the user can still paste by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteResult {
    /// The operation succeeded end-to-end.
    pub success: bool,
    /// The OS denied automation permission; the caller should prompt the user
    /// to grant it.
    pub needs_permission: bool,
    /// The payload was placed on the system clipboard.
    pub copied: bool,
    /// Resolved target application display name, when a target was resolved.
    pub target_app: Option<String>,
}

impl PasteResult {
    /// Result of a gate rejection: nothing was touched.
    pub fn rejected() -> Self {
        Self {
            success: false,
            needs_permission: false,
            copied: false,
            target_app: None,
        }
    }
}

/// How a requested window title is matched against actual window titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Only an exact title match raises the window.
    Exact,
    /// Try an exact match first; on failure retry with a contains match.
    /// Accommodates OS-level title truncation or decoration.
    ExactThenContains,
}

/// Per-operation dispatch parameters.
///
/// The public operations differ only in these two knobs; the dispatch
/// sequence itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProfile {
    /// Whether to follow the paste keystroke with a confirm/enter keystroke.
    pub send_confirm_keystroke: bool,
    /// Window title match policy for window-targeted dispatch.
    pub match_policy: MatchPolicy,
}

impl DispatchProfile {
    /// Profile for app-targeted and most-recent-terminal dispatch: paste and
    /// confirm, no specific window.
    pub fn confirmed() -> Self {
        Self {
            send_confirm_keystroke: true,
            match_policy: MatchPolicy::Exact,
        }
    }

    /// Profile for window-targeted dispatch: paste without confirm, fuzzy
    /// window matching.
    pub fn window_targeted() -> Self {
        Self {
            send_confirm_keystroke: false,
            match_policy: MatchPolicy::ExactThenContains,
        }
    }
}

/// Configuration for the automation subsystem.
/// Typically deserialized from the application's configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Minimum interval between successful dispatch lock acquisitions.
    #[serde(default = "default_min_interval_ms")]
    pub min_dispatch_interval_ms: u64,

    /// Window within which an identical payload is suppressed as a duplicate.
    #[serde(default = "default_duplicate_window_ms")]
    pub duplicate_text_window_ms: u64,

    /// Delay between the paste keystroke and the confirm keystroke, sized so
    /// large payloads fully populate before a follow-on key.
    #[serde(default = "default_settle_ms")]
    pub paste_settle_delay_ms: u64,

    /// Timeout for a single automation script invocation.
    #[serde(default = "default_script_timeout_ms")]
    pub script_timeout_ms: u64,

    /// Whether to sample the frontmost process for recency tracking.
    #[serde(default = "default_true")]
    pub track_frontmost: bool,

    /// Whether to redact payload text in logs.
    #[serde(default = "default_true")]
    pub redact_logs: bool,
}

fn default_min_interval_ms() -> u64 {
    crate::constants::DISPATCH_MIN_INTERVAL_MS
}

fn default_duplicate_window_ms() -> u64 {
    crate::constants::DUPLICATE_TEXT_WINDOW_MS
}

fn default_settle_ms() -> u64 {
    crate::constants::PASTE_SETTLE_DELAY_MS
}

fn default_script_timeout_ms() -> u64 {
    crate::constants::SCRIPT_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            min_dispatch_interval_ms: default_min_interval_ms(),
            duplicate_text_window_ms: default_duplicate_window_ms(),
            paste_settle_delay_ms: default_settle_ms(),
            script_timeout_ms: default_script_timeout_ms(),
            track_frontmost: default_true(),
            redact_logs: default_true(),
        }
    }
}
