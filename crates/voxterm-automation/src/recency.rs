//! # Frontmost-Terminal Recency Tracking
//!
//! Samples the frontmost process name on an interval and remembers when each
//! catalog terminal was last frontmost, so "most recent terminal" resolution
//! reflects actual focus history instead of catalog order. Sampling is
//! best-effort: a failed query is skipped and the next tick retries.

use crate::catalog::TerminalCatalog;
use crate::constants::frontmost_sample_interval;
use crate::types::TerminalApp;
use crate::AutomationChannel;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, trace};
use voxterm_foundation::SharedClock;

pub struct FrontmostTracker {
    channel: Arc<dyn AutomationChannel>,
    catalog: Arc<TerminalCatalog>,
    clock: SharedClock,
    /// process name -> instant it was last observed frontmost
    seen: Mutex<HashMap<String, Instant>>,
}

impl FrontmostTracker {
    pub fn new(
        channel: Arc<dyn AutomationChannel>,
        catalog: Arc<TerminalCatalog>,
        clock: SharedClock,
    ) -> Self {
        Self {
            channel,
            catalog,
            clock,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Take one frontmost sample. Non-catalog processes and failed queries
    /// are ignored.
    pub async fn sample_once(&self) {
        match self.channel.frontmost_process_name().await {
            Ok(name) => {
                if self.catalog.find_by_process_name(&name).is_some() {
                    trace!("Frontmost terminal observed: {}", name);
                    self.seen.lock().insert(name, self.clock.now());
                }
            }
            Err(e) => debug!("Frontmost sample failed, skipping tick: {}", e),
        }
    }

    /// Spawn the background sampling task. The handle is aborted on
    /// shutdown.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frontmost_sample_interval());
            loop {
                ticker.tick().await;
                self.sample_once().await;
            }
        })
    }

    /// Record a frontmost observation directly. Used by tests and by callers
    /// that already know the frontmost process.
    pub fn note_frontmost(&self, process_name: &str) {
        if self.catalog.find_by_process_name(process_name).is_some() {
            self.seen
                .lock()
                .insert(process_name.to_string(), self.clock.now());
        }
    }

    /// The running app most recently observed frontmost, or `None` when no
    /// sample covers any running app (callers then fall back to catalog
    /// order).
    pub fn most_recent<'a>(&self, running: &'a [TerminalApp]) -> Option<&'a TerminalApp> {
        let seen = self.seen.lock();
        running
            .iter()
            .filter_map(|app| seen.get(&app.process_name).map(|at| (app, *at)))
            .max_by_key(|(_, at)| *at)
            .map(|(app, _)| app)
    }
}
