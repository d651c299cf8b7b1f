//! # Dispatch Metrics
//!
//! Lightweight counters for dispatch outcomes. Kept dependency-free and
//! cheap to update; the caller layer reads snapshots for display or logs
//! them at shutdown.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DispatchMetrics {
    /// Dispatches that passed the gate and started the action sequence.
    pub attempts: u64,
    /// Calls rejected by the gate (busy, debounced, or duplicate payload).
    pub gate_rejections: u64,
    /// End-to-end successes.
    pub successes: u64,
    /// Failures classified as automation-permission denials.
    pub permission_denials: u64,
    /// Dispatches that found no running terminal to target.
    pub no_target: u64,
    /// Other failures, keyed by error kind.
    pub failures_by_kind: HashMap<String, u64>,
    /// Latency of the most recent completed dispatch.
    pub last_dispatch_latency_ms: Option<u32>,
    /// Wall-clock time of the most recent completed dispatch.
    pub last_dispatch_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl DispatchMetrics {
    pub fn record_rejection(&mut self) {
        self.gate_rejections += 1;
    }

    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub fn record_success(&mut self, latency_ms: u32) {
        self.successes += 1;
        self.finish(latency_ms);
    }

    pub fn record_permission_denial(&mut self, latency_ms: u32) {
        self.permission_denials += 1;
        self.finish(latency_ms);
    }

    pub fn record_no_target(&mut self, latency_ms: u32) {
        self.no_target += 1;
        self.finish(latency_ms);
    }

    pub fn record_failure(&mut self, kind: &str, latency_ms: u32) {
        *self.failures_by_kind.entry(kind.to_string()).or_default() += 1;
        self.finish(latency_ms);
    }

    fn finish(&mut self, latency_ms: u32) {
        self.last_dispatch_latency_ms = Some(latency_ms);
        self.last_dispatch_at = Some(chrono::Utc::now());
    }
}
