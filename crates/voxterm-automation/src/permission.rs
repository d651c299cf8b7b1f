//! # Permission Classifier
//!
//! Distinguishes "the OS denied automation permission" from every other
//! automation failure, so callers can direct the user to grant access
//! instead of showing a generic error.

/// Verdict of classifying an automation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionVerdict {
    /// The failure is an automation-permission denial.
    Denied,
    /// Any other failure.
    Other,
}

/// Failure-detail fragments that identify a permission denial. Matched
/// case-insensitively against the raw tool error text.
const DENIAL_PATTERNS: &[&str] = &[
    // System Events refuses synthetic keystrokes without Accessibility access.
    "not allowed to send keystrokes",
    // Apple events to System Events blocked by the Automation privacy pane.
    "not authorized to send apple events",
    "assistive access",
    // Numeric codes as emitted by the scripting bridge.
    "(1002)",
    "-1743",
    "-25211",
];

/// Classify an automation failure detail string. Total function: any input,
/// including empty, yields a verdict.
pub fn classify(failure_detail: &str) -> PermissionVerdict {
    let lower = failure_detail.to_lowercase();
    if DENIAL_PATTERNS.iter().any(|p| lower.contains(p)) {
        PermissionVerdict::Denied
    } else {
        PermissionVerdict::Other
    }
}
