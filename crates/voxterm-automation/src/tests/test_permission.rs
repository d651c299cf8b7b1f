use crate::permission::{classify, PermissionVerdict};

#[test]
fn keystroke_denial_text_is_recognized() {
    let detail =
        "System Events got an error: osascript is not allowed to send keystrokes. (1002)";
    assert_eq!(classify(detail), PermissionVerdict::Denied);
}

#[test]
fn apple_event_authorization_code_is_recognized() {
    let detail = "Not authorized to send Apple events to System Events. (-1743)";
    assert_eq!(classify(detail), PermissionVerdict::Denied);
}

#[test]
fn assistive_access_message_is_recognized() {
    let detail = "osascript is not allowed assistive access. (-25211)";
    assert_eq!(classify(detail), PermissionVerdict::Denied);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        classify("NOT ALLOWED TO SEND KEYSTROKES"),
        PermissionVerdict::Denied
    );
}

#[test]
fn unrelated_failures_are_other() {
    assert_eq!(
        classify("execution error: application \"ghost\" not found"),
        PermissionVerdict::Other
    );
    assert_eq!(classify("timed out waiting for reply"), PermissionVerdict::Other);
}

#[test]
fn empty_detail_is_other() {
    assert_eq!(classify(""), PermissionVerdict::Other);
}
