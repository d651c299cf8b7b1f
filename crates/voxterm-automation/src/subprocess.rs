//! # Strict-Timeout Subprocess Execution
//!
//! Helpers for running external automation tools with hard timeouts so that
//! no hung tool can block the dispatcher. `kill_on_drop(true)` guarantees
//! cleanup when a timeout fires.

use crate::error::AutomationError;
use std::time::Duration;

/// Runs a command and captures its stdout, with a strict timeout.
///
/// On timeout the child is killed and `AutomationError::Timeout` is returned.
/// A non-zero exit status is reported as `CommandFailed` carrying the tool's
/// stderr text, which callers feed to the permission classifier.
pub async fn run_tool_with_timeout(
    program: &'static str,
    args: &[&str],
    phase: &'static str,
    ms: u64,
) -> Result<String, AutomationError> {
    let mut command = tokio::process::Command::new(program);
    command
        .args(args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true);

    let child = command
        .spawn()
        .map_err(|source| AutomationError::Launch { program, source })?;

    match tokio::time::timeout(Duration::from_millis(ms), child.wait_with_output()).await {
        Ok(Ok(output)) => {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .map_err(|_| AutomationError::InvalidUtf8 { program })
            } else {
                let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
                Err(AutomationError::CommandFailed {
                    program,
                    phase,
                    detail,
                })
            }
        }
        Ok(Err(source)) => Err(AutomationError::Launch { program, source }),
        Err(_) => Err(AutomationError::Timeout {
            program,
            phase,
            elapsed_ms: ms,
        }),
    }
}
