//! # Paste Gate
//!
//! The serializer that guarantees at most one dispatch is in its
//! actions-in-flight phase at any instant. An explicit object rather than
//! ambient global state: independent instances share nothing, so tests can
//! wire up as many as they need.
//!
//! Three admission checks, all of which must pass:
//! 1. busy flag clear: no other dispatch between lock and terminal state;
//! 2. time debounce: a minimum interval since the last successful
//!    acquisition;
//! 3. duplicate suppression: the payload differs from the immediately
//!    preceding one, unless that one is old enough.

use crate::constants::{dispatch_min_interval, duplicate_text_window};
use parking_lot::Mutex;
use std::time::{Duration, Instant};
use voxterm_foundation::SharedClock;

#[derive(Debug, Default)]
struct GateState {
    busy: bool,
    last_acquired: Option<Instant>,
    last_text: Option<(String, Instant)>,
}

pub struct PasteGate {
    state: Mutex<GateState>,
    min_interval: Duration,
    duplicate_window: Duration,
    clock: SharedClock,
}

impl PasteGate {
    pub fn new(clock: SharedClock) -> Self {
        Self::with_intervals(clock, dispatch_min_interval(), duplicate_text_window())
    }

    pub fn with_intervals(
        clock: SharedClock,
        min_interval: Duration,
        duplicate_window: Duration,
    ) -> Self {
        Self {
            state: Mutex::new(GateState::default()),
            min_interval,
            duplicate_window,
            clock,
        }
    }

    /// Attempt to acquire the gate for a payload. Returns false without side
    /// effects when any admission check fails; on success the busy flag is
    /// set and the debounce/duplicate bookkeeping is updated.
    pub fn try_acquire(&self, text: &str) -> bool {
        let now = self.clock.now();
        let mut state = self.state.lock();

        if state.busy {
            return false;
        }

        if let Some(at) = state.last_acquired {
            if now.duration_since(at) < self.min_interval {
                return false;
            }
        }

        if let Some((last_text, at)) = &state.last_text {
            if last_text == text && now.duration_since(*at) < self.duplicate_window {
                return false;
            }
        }

        state.busy = true;
        state.last_acquired = Some(now);
        state.last_text = Some((text.to_string(), now));
        true
    }

    /// Clear the busy flag. Debounce and duplicate bookkeeping are kept:
    /// release ends the in-flight phase, it does not re-open the rate limit.
    pub fn release(&self) {
        self.state.lock().busy = false;
    }

    /// Guard-based acquisition: the gate is released when the guard drops,
    /// on every exit path including panics and early returns.
    pub fn acquire(&self, text: &str) -> Option<GateGuard<'_>> {
        if self.try_acquire(text) {
            Some(GateGuard { gate: self })
        } else {
            None
        }
    }

    /// Whether a dispatch is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.state.lock().busy
    }
}

pub struct GateGuard<'a> {
    gate: &'a PasteGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
