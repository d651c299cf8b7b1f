use crate::gate::PasteGate;
use std::sync::Arc;
use std::time::Duration;
use voxterm_foundation::{SharedClock, TestClock};

fn gate_with_clock() -> (Arc<PasteGate>, Arc<TestClock>) {
    let clock = Arc::new(TestClock::new());
    let shared: SharedClock = clock.clone();
    let gate = Arc::new(PasteGate::with_intervals(
        shared,
        Duration::from_millis(3000),
        Duration::from_millis(10_000),
    ));
    (gate, clock)
}

#[test]
fn busy_gate_rejects() {
    let (gate, _clock) = gate_with_clock();
    assert!(gate.try_acquire("first"));
    assert!(gate.is_busy());
    assert!(!gate.try_acquire("second"));
}

#[test]
fn release_does_not_reopen_the_debounce() {
    let (gate, clock) = gate_with_clock();
    assert!(gate.try_acquire("first"));
    gate.release();
    // Released but still inside the minimum interval.
    assert!(!gate.try_acquire("second"));
    clock.advance(Duration::from_millis(3001));
    assert!(gate.try_acquire("second"));
}

#[test]
fn duplicate_text_is_suppressed_after_the_debounce_expires() {
    let (gate, clock) = gate_with_clock();
    assert!(gate.try_acquire("say this"));
    gate.release();

    // Past the time debounce, but the identical payload is still recent.
    clock.advance(Duration::from_millis(4000));
    assert!(!gate.try_acquire("say this"));
    // A different payload is admitted at the same instant.
    assert!(gate.try_acquire("say that"));
    gate.release();
}

#[test]
fn duplicate_window_expiry_readmits_the_same_text() {
    let (gate, clock) = gate_with_clock();
    assert!(gate.try_acquire("say this"));
    gate.release();

    clock.advance(Duration::from_millis(10_001));
    assert!(gate.try_acquire("say this"));
}

#[test]
fn guard_releases_on_drop() {
    let (gate, clock) = gate_with_clock();
    {
        let _guard = gate.acquire("scoped").expect("first acquisition");
        assert!(gate.is_busy());
    }
    assert!(!gate.is_busy());
    clock.advance(Duration::from_millis(3001));
    assert!(gate.acquire("next").is_some());
}

#[test]
fn independent_gates_share_nothing() {
    let (gate_a, _clock_a) = gate_with_clock();
    let (gate_b, _clock_b) = gate_with_clock();
    assert!(gate_a.try_acquire("text"));
    assert!(gate_b.try_acquire("text"));
}

#[test]
fn rejection_leaves_no_bookkeeping_behind() {
    let (gate, clock) = gate_with_clock();
    assert!(gate.try_acquire("first"));
    // Rejected while busy; must not refresh the duplicate window for "second".
    assert!(!gate.try_acquire("second"));
    gate.release();
    clock.advance(Duration::from_millis(3001));
    assert!(gate.try_acquire("second"));
}
