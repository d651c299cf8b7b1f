//! # Injection Dispatcher
//!
//! Turns a (text, target) request into an ordered sequence of OS actions
//! (clipboard write, app/window activation, paste keystroke, optional
//! confirm keystroke) under the paste gate's mutual exclusion. All automation
//! failures are caught here and converted into a `PasteResult`; nothing
//! escapes to the caller as an unhandled fault.
//!
//! Sequence per request, once the gate admits it:
//! 1. clipboard write (always first, so any downstream failure still leaves
//!    the payload pasteable by hand);
//! 2. target resolution (explicit id, else recency-tracked running terminal,
//!    else first running catalog entry);
//! 3. best-effort activation and window raise (failures logged, swallowed);
//! 4. paste keystroke, settle delay, optional confirm keystroke;
//! 5. failure classification, gate release on every exit path.

use crate::catalog::TerminalCatalog;
use crate::clipboard::ClipboardBridge;
use crate::constants::activation_settle_delay;
use crate::error::AutomationError;
use crate::gate::PasteGate;
use crate::inspector::ProcessInspector;
use crate::metrics::DispatchMetrics;
use crate::permission::{classify, PermissionVerdict};
use crate::recency::FrontmostTracker;
use crate::types::{
    AutomationConfig, DispatchProfile, PasteRequest, PasteResult, PasteTarget, TerminalApp,
    TerminalWindow,
};
use crate::windows::WindowEnumerator;
use crate::AutomationChannel;
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use voxterm_foundation::SharedClock;

/// Redact payload text for privacy-first logging.
fn redact_text(text: &str, redact: bool) -> String {
    if redact {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let hash = hasher.finish();
        format!("len={} hash={:08x}", text.len(), (hash & 0xFFFF_FFFF))
    } else {
        text.to_string()
    }
}

fn error_kind(err: &AutomationError) -> &'static str {
    match err {
        AutomationError::Launch { .. } => "launch",
        AutomationError::Timeout { .. } => "timeout",
        AutomationError::CommandFailed { .. } => "command",
        AutomationError::InvalidUtf8 { .. } => "utf8",
        AutomationError::Clipboard(_) => "clipboard",
    }
}

pub struct InjectionDispatcher {
    channel: Arc<dyn AutomationChannel>,
    clipboard: Arc<dyn ClipboardBridge>,
    catalog: Arc<TerminalCatalog>,
    inspector: ProcessInspector,
    enumerator: WindowEnumerator,
    gate: PasteGate,
    tracker: Option<Arc<FrontmostTracker>>,
    config: AutomationConfig,
    metrics: Arc<Mutex<DispatchMetrics>>,
}

impl InjectionDispatcher {
    pub fn new(
        channel: Arc<dyn AutomationChannel>,
        clipboard: Arc<dyn ClipboardBridge>,
        catalog: Arc<TerminalCatalog>,
        clock: SharedClock,
        config: AutomationConfig,
    ) -> Self {
        let gate = PasteGate::with_intervals(
            clock,
            Duration::from_millis(config.min_dispatch_interval_ms),
            Duration::from_millis(config.duplicate_text_window_ms),
        );
        Self {
            inspector: ProcessInspector::new(Arc::clone(&channel), Arc::clone(&catalog)),
            enumerator: WindowEnumerator::new(Arc::clone(&channel)),
            channel,
            clipboard,
            catalog,
            gate,
            tracker: None,
            config,
            metrics: Arc::new(Mutex::new(DispatchMetrics::default())),
        }
    }

    /// Attach a frontmost tracker for most-recent-terminal resolution.
    pub fn with_tracker(mut self, tracker: Arc<FrontmostTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Inject into the application with the given id, confirming with an
    /// enter keystroke.
    pub async fn dispatch_to_app(&self, text: &str, app_id: &str) -> PasteResult {
        self.dispatch(
            PasteRequest {
                text: text.to_string(),
                target: Some(PasteTarget {
                    app_id: app_id.to_string(),
                    window_name: None,
                }),
            },
            DispatchProfile::confirmed(),
        )
        .await
    }

    /// Inject into a specific window of an application, without a confirm
    /// keystroke. The window title is matched exactly first, then by
    /// substring.
    pub async fn dispatch_to_window(
        &self,
        text: &str,
        app_id: &str,
        window_name: &str,
    ) -> PasteResult {
        self.dispatch(
            PasteRequest {
                text: text.to_string(),
                target: Some(PasteTarget {
                    app_id: app_id.to_string(),
                    window_name: Some(window_name.to_string()),
                }),
            },
            DispatchProfile::window_targeted(),
        )
        .await
    }

    /// Inject into the most recently frontmost running terminal (catalog
    /// order when no recency sample exists), confirming with an enter
    /// keystroke.
    pub async fn dispatch_to_most_recent_terminal(&self, text: &str) -> PasteResult {
        self.dispatch(
            PasteRequest {
                text: text.to_string(),
                target: None,
            },
            DispatchProfile::confirmed(),
        )
        .await
    }

    pub async fn list_running_terminal_apps(&self) -> Vec<TerminalApp> {
        self.inspector.list_running_terminal_apps().await
    }

    pub async fn list_all_windows(&self) -> Vec<TerminalWindow> {
        self.enumerator.list_all_windows(&self.inspector).await
    }

    pub fn metrics_snapshot(&self) -> DispatchMetrics {
        self.metrics.lock().clone()
    }

    async fn dispatch(&self, request: PasteRequest, profile: DispatchProfile) -> PasteResult {
        let Some(_guard) = self.gate.acquire(&request.text) else {
            debug!(
                "Dispatch rejected by gate: {}",
                redact_text(&request.text, self.config.redact_logs)
            );
            self.metrics.lock().record_rejection();
            return PasteResult::rejected();
        };
        let start = Instant::now();
        self.metrics.lock().record_attempt();

        // Clipboard first. A write failure aborts before any keystroke: a
        // paste at this point would inject stale clipboard content.
        if let Err(e) = self.clipboard.write_text(&request.text).await {
            warn!("Clipboard write failed, aborting dispatch: {}", e);
            self.metrics
                .lock()
                .record_failure("clipboard", elapsed_ms(start));
            return PasteResult {
                success: false,
                needs_permission: false,
                copied: false,
                target_app: None,
            };
        }

        let resolved = match &request.target {
            Some(target) => Some(self.resolve_explicit(target)),
            None => self.resolve_most_recent().await,
        };
        let Some(app) = resolved else {
            info!("No running terminal application to target; payload left on clipboard");
            self.metrics.lock().record_no_target(elapsed_ms(start));
            return PasteResult {
                success: false,
                needs_permission: false,
                copied: true,
                target_app: None,
            };
        };

        // Activation and window raise are best-effort: the paste keystroke
        // may still land correctly if the app is already frontmost.
        if let Err(e) = self.channel.activate_app(&app.app_id).await {
            warn!("Activation of {} failed (continuing): {}", app.app_id, e);
        }
        if let Some(window_name) = request.target.as_ref().and_then(|t| t.window_name.as_deref()) {
            if let Err(e) = self
                .channel
                .raise_window(&app.process_name, window_name, profile.match_policy)
                .await
            {
                warn!("Raising window {:?} failed (continuing): {}", window_name, e);
            }
        }
        tokio::time::sleep(activation_settle_delay()).await;

        let outcome = self.run_keystroke_sequence(profile).await;
        let latency = elapsed_ms(start);

        match outcome {
            Ok(()) => {
                info!(
                    "Injected {} into {} in {}ms",
                    redact_text(&request.text, self.config.redact_logs),
                    app.display_name,
                    latency
                );
                self.metrics.lock().record_success(latency);
                PasteResult {
                    success: true,
                    needs_permission: false,
                    copied: true,
                    target_app: Some(app.display_name),
                }
            }
            Err(e) => {
                let detail = e.to_string();
                let needs_permission = classify(&detail) == PermissionVerdict::Denied;
                if needs_permission {
                    warn!("Automation permission denied: {}", detail);
                    self.metrics.lock().record_permission_denial(latency);
                } else {
                    warn!("Keystroke sequence failed: {}", detail);
                    self.metrics.lock().record_failure(error_kind(&e), latency);
                }
                PasteResult {
                    success: false,
                    needs_permission,
                    copied: true,
                    target_app: Some(app.display_name),
                }
            }
        }
    }

    async fn run_keystroke_sequence(
        &self,
        profile: DispatchProfile,
    ) -> Result<(), AutomationError> {
        self.channel.send_paste_keystroke().await?;
        if profile.send_confirm_keystroke {
            // Let large payloads fully populate before the confirm lands.
            tokio::time::sleep(Duration::from_millis(self.config.paste_settle_delay_ms)).await;
            self.channel.send_confirm_keystroke().await?;
        }
        Ok(())
    }

    /// An explicit application id is used as given. Ids outside the catalog
    /// fall back to using the id for process addressing too.
    fn resolve_explicit(&self, target: &PasteTarget) -> TerminalApp {
        self.catalog
            .find_by_app_id(&target.app_id)
            .cloned()
            .unwrap_or_else(|| TerminalApp {
                process_name: target.app_id.clone(),
                app_id: target.app_id.clone(),
                display_name: target.app_id.clone(),
            })
    }

    async fn resolve_most_recent(&self) -> Option<TerminalApp> {
        let running = self.inspector.list_running_terminal_apps().await;
        if running.is_empty() {
            return None;
        }
        if let Some(tracker) = &self.tracker {
            if let Some(app) = tracker.most_recent(&running) {
                return Some(app.clone());
            }
        }
        running.into_iter().next()
    }
}

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}
