//! # Timing and Display Constants
//!
//! This module centralizes the crate's timing constants and display
//! thresholds so they can be tuned from a single location.

use std::time::Duration;

// --- Dispatch gating ---
/// Minimum interval between successful dispatch lock acquisitions. Suppresses
/// runaway repeated triggers, e.g. a flaky hotkey or duplicate UI event.
pub const DISPATCH_MIN_INTERVAL_MS: u64 = 3000;

/// Window within which a payload identical to the previous one is suppressed,
/// independent of the time debounce.
pub const DUPLICATE_TEXT_WINDOW_MS: u64 = 10_000;

// --- Keystroke pacing ---
/// Delay between the paste keystroke and a follow-on confirm keystroke. Sized
/// so large payloads fully populate the target before the confirm lands.
pub const PASTE_SETTLE_DELAY_MS: u64 = 500;

/// Delay after app/window activation before the first keystroke, giving the
/// OS time to move focus.
pub const ACTIVATION_SETTLE_DELAY_MS: u64 = 200;

// --- Automation scripts ---
/// Timeout for a single control-script invocation. Scripts are short control
/// actions; anything slower than this is hung.
pub const SCRIPT_TIMEOUT_MS: u64 = 5000;

// --- Recency tracking ---
/// Interval between frontmost-process samples.
pub const FRONTMOST_SAMPLE_INTERVAL_MS: u64 = 2000;

// --- Window display ---
/// Window titles longer than this are truncated for display.
pub const WINDOW_TITLE_DISPLAY_LIMIT: usize = 50;

/// Length of the kept prefix when a title is truncated; the ellipsis brings
/// the display name back up to the display limit.
pub const WINDOW_TITLE_TRUNCATED_LEN: usize = 47;

/// Ellipsis appended to truncated display names.
pub const WINDOW_TITLE_ELLIPSIS: &str = "...";

// --- Convenience Functions ---
pub fn dispatch_min_interval() -> Duration {
    Duration::from_millis(DISPATCH_MIN_INTERVAL_MS)
}

pub fn duplicate_text_window() -> Duration {
    Duration::from_millis(DUPLICATE_TEXT_WINDOW_MS)
}

pub fn paste_settle_delay() -> Duration {
    Duration::from_millis(PASTE_SETTLE_DELAY_MS)
}

pub fn activation_settle_delay() -> Duration {
    Duration::from_millis(ACTIVATION_SETTLE_DELAY_MS)
}

pub fn frontmost_sample_interval() -> Duration {
    Duration::from_millis(FRONTMOST_SAMPLE_INTERVAL_MS)
}
