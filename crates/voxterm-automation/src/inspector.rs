//! # Process Inspector
//!
//! Determines which catalog entries are currently running. A query failure
//! for an individual entry counts as "not running"; the scan never aborts
//! because one process lookup misbehaved.

use crate::catalog::TerminalCatalog;
use crate::types::TerminalApp;
use crate::AutomationChannel;
use std::sync::Arc;
use tracing::debug;

pub struct ProcessInspector {
    channel: Arc<dyn AutomationChannel>,
    catalog: Arc<TerminalCatalog>,
}

impl ProcessInspector {
    pub fn new(channel: Arc<dyn AutomationChannel>, catalog: Arc<TerminalCatalog>) -> Self {
        Self { channel, catalog }
    }

    pub fn catalog(&self) -> &TerminalCatalog {
        &self.catalog
    }

    /// The catalog entries whose processes the OS confirms are running, in
    /// catalog order. No side effects.
    pub async fn list_running_terminal_apps(&self) -> Vec<TerminalApp> {
        let mut running = Vec::new();
        for app in self.catalog.entries() {
            match self.channel.is_process_running(&app.process_name).await {
                Ok(true) => running.push(app.clone()),
                Ok(false) => {}
                Err(e) => {
                    // Fail open to exclusion: an unanswerable query is not a
                    // running terminal.
                    debug!(
                        "Process query for {} failed, treating as not running: {}",
                        app.process_name, e
                    );
                }
            }
        }
        running
    }
}
