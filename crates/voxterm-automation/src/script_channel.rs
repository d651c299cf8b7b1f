//! # Scripting-Bridge Automation Channel
//!
//! Drives the System Events scripting bridge through `osascript`. Every
//! script is a fixed control action; dynamic values (process names, window
//! titles) are passed as script arguments via `on run argv`, never spliced
//! into the script text. Payload text does not pass through this module at
//! all; the clipboard bridge carries it.

use crate::error::AutomationError;
use crate::subprocess::run_tool_with_timeout;
use crate::types::MatchPolicy;
use crate::AutomationChannel;
use async_trait::async_trait;
use tracing::{debug, trace};

const OSASCRIPT: &str = "osascript";

/// `AutomationChannel` implementation over the platform scripting bridge.
pub struct ScriptChannel {
    timeout_ms: u64,
}

impl ScriptChannel {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    /// Run a fixed script with positional arguments. `lines` is the script
    /// body; each element becomes one `-e` statement.
    async fn run_script(
        &self,
        phase: &'static str,
        lines: &[&str],
        script_args: &[&str],
    ) -> Result<String, AutomationError> {
        let mut args: Vec<&str> = Vec::with_capacity(lines.len() * 2 + script_args.len() + 1);
        for &line in lines {
            args.push("-e");
            args.push(line);
        }
        // Terminate option parsing so a title starting with '-' stays an
        // argument.
        args.push("--");
        args.extend_from_slice(script_args);

        trace!(phase, "running {} control script", OSASCRIPT);
        run_tool_with_timeout(OSASCRIPT, &args, phase, self.timeout_ms).await
    }
}

#[async_trait]
impl AutomationChannel for ScriptChannel {
    async fn is_process_running(&self, process_name: &str) -> Result<bool, AutomationError> {
        let out = self
            .run_script(
                "process-query",
                &[
                    "on run argv",
                    "tell application \"System Events\" to return exists (first process whose name is (item 1 of argv))",
                    "end run",
                ],
                &[process_name],
            )
            .await?;
        Ok(out.trim() == "true")
    }

    async fn list_window_titles(&self, process_name: &str) -> Result<Vec<String>, AutomationError> {
        let out = self
            .run_script(
                "window-enumeration",
                &[
                    "on run argv",
                    "tell application \"System Events\" to tell (first process whose name is (item 1 of argv)) to set titleList to name of windows",
                    "set text item delimiters to linefeed",
                    "return titleList as text",
                    "end run",
                ],
                &[process_name],
            )
            .await?;
        Ok(out
            .lines()
            .map(str::trim_end)
            .filter(|t| !t.is_empty() && *t != "missing value")
            .map(String::from)
            .collect())
    }

    async fn activate_app(&self, app_id: &str) -> Result<(), AutomationError> {
        self.run_script(
            "activate",
            &[
                "on run argv",
                "tell application id (item 1 of argv) to activate",
                "end run",
            ],
            &[app_id],
        )
        .await?;
        Ok(())
    }

    async fn raise_window(
        &self,
        process_name: &str,
        window_name: &str,
        policy: MatchPolicy,
    ) -> Result<(), AutomationError> {
        let exact = self
            .run_script(
                "raise-window",
                &[
                    "on run argv",
                    "tell application \"System Events\" to tell (first process whose name is (item 1 of argv))",
                    "perform action \"AXRaise\" of (first window whose name is (item 2 of argv))",
                    "set frontmost to true",
                    "end tell",
                    "end run",
                ],
                &[process_name, window_name],
            )
            .await;

        match (exact, policy) {
            (Ok(_), _) => Ok(()),
            (Err(e), MatchPolicy::Exact) => {
                debug!("Exact window match failed: {}", e);
                Err(e)
            }
            (Err(e), MatchPolicy::ExactThenContains) => {
                debug!("Exact window match failed, retrying with contains: {}", e);
                self.run_script(
                    "raise-window-contains",
                    &[
                        "on run argv",
                        "tell application \"System Events\" to tell (first process whose name is (item 1 of argv))",
                        "perform action \"AXRaise\" of (first window whose name contains (item 2 of argv))",
                        "set frontmost to true",
                        "end tell",
                        "end run",
                    ],
                    &[process_name, window_name],
                )
                .await
                .map(|_| ())
            }
        }
    }

    async fn send_paste_keystroke(&self) -> Result<(), AutomationError> {
        self.run_script(
            "paste-keystroke",
            &["tell application \"System Events\" to keystroke \"v\" using command down"],
            &[],
        )
        .await?;
        Ok(())
    }

    async fn send_confirm_keystroke(&self) -> Result<(), AutomationError> {
        self.run_script(
            "confirm-keystroke",
            &["tell application \"System Events\" to key code 36"],
            &[],
        )
        .await?;
        Ok(())
    }

    async fn frontmost_process_name(&self) -> Result<String, AutomationError> {
        let out = self
            .run_script(
                "frontmost-query",
                &["tell application \"System Events\" to return name of first process whose frontmost is true"],
                &[],
            )
            .await?;
        Ok(out.trim().to_string())
    }

    fn channel_name(&self) -> &'static str {
        "script"
    }
}
