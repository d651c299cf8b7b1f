use crate::error::AutomationError;
use crate::types::MatchPolicy;
use crate::AutomationChannel;
use async_trait::async_trait;
use tracing::trace;

/// A fallback channel that reports nothing running and accepts every control
/// action. Lets the rest of the application run when OS automation is
/// disabled or unavailable.
pub struct NoOpChannel;

impl Default for NoOpChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NoOpChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AutomationChannel for NoOpChannel {
    async fn is_process_running(&self, process_name: &str) -> Result<bool, AutomationError> {
        trace!("NoOpChannel: treating {} as not running", process_name);
        Ok(false)
    }

    async fn list_window_titles(&self, _process_name: &str) -> Result<Vec<String>, AutomationError> {
        Ok(Vec::new())
    }

    async fn activate_app(&self, app_id: &str) -> Result<(), AutomationError> {
        trace!("NoOpChannel: pretending to activate {}", app_id);
        Ok(())
    }

    async fn raise_window(
        &self,
        _process_name: &str,
        _window_name: &str,
        _policy: MatchPolicy,
    ) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn send_paste_keystroke(&self) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn send_confirm_keystroke(&self) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn frontmost_process_name(&self) -> Result<String, AutomationError> {
        Err(AutomationError::CommandFailed {
            program: "noop",
            phase: "frontmost-query",
            detail: "no automation channel available".to_string(),
        })
    }

    fn channel_name(&self) -> &'static str {
        "noop"
    }
}
