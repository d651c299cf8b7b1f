use crate::catalog::TerminalCatalog;
use crate::recency::FrontmostTracker;
use crate::tests::mock_channel::MockChannel;
use crate::AutomationChannel;
use std::sync::Arc;
use std::time::Duration;
use voxterm_foundation::{SharedClock, TestClock};

fn tracker_with_clock() -> (Arc<MockChannel>, Arc<TestClock>, FrontmostTracker) {
    let channel = Arc::new(MockChannel::new());
    let clock = Arc::new(TestClock::new());
    let tracker = FrontmostTracker::new(
        Arc::clone(&channel) as Arc<dyn AutomationChannel>,
        Arc::new(TerminalCatalog::builtin()),
        clock.clone() as SharedClock,
    );
    (channel, clock, tracker)
}

fn running(names: &[&str]) -> Vec<crate::types::TerminalApp> {
    let catalog = TerminalCatalog::builtin();
    names
        .iter()
        .map(|n| catalog.find_by_process_name(n).cloned().unwrap())
        .collect()
}

#[tokio::test]
async fn latest_frontmost_sample_wins() {
    let (_channel, clock, tracker) = tracker_with_clock();
    tracker.note_frontmost("Terminal");
    clock.advance(Duration::from_secs(1));
    tracker.note_frontmost("iTerm2");

    let apps = running(&["Terminal", "iTerm2"]);
    assert_eq!(tracker.most_recent(&apps).unwrap().process_name, "iTerm2");
}

#[tokio::test]
async fn samples_for_apps_no_longer_running_are_ignored() {
    let (_channel, clock, tracker) = tracker_with_clock();
    tracker.note_frontmost("iTerm2");
    clock.advance(Duration::from_secs(1));
    tracker.note_frontmost("kitty");

    // kitty has since exited; the freshest sample among running apps wins.
    let apps = running(&["Terminal", "iTerm2"]);
    assert_eq!(tracker.most_recent(&apps).unwrap().process_name, "iTerm2");
}

#[tokio::test]
async fn no_samples_means_no_opinion() {
    let (_channel, _clock, tracker) = tracker_with_clock();
    let apps = running(&["Terminal"]);
    assert!(tracker.most_recent(&apps).is_none());
}

#[tokio::test]
async fn sampling_records_catalog_processes_only() {
    let (channel, _clock, tracker) = tracker_with_clock();

    channel.set_frontmost("Safari");
    tracker.sample_once().await;
    assert!(tracker.most_recent(&running(&["Terminal"])).is_none());

    channel.set_frontmost("Terminal");
    tracker.sample_once().await;
    assert_eq!(
        tracker
            .most_recent(&running(&["Terminal"]))
            .unwrap()
            .process_name,
        "Terminal"
    );
}

#[tokio::test]
async fn failed_samples_are_skipped() {
    let (_channel, _clock, tracker) = tracker_with_clock();
    // No frontmost process scripted: the query fails, the tick is skipped.
    tracker.sample_once().await;
    assert!(tracker.most_recent(&running(&["Terminal"])).is_none());
}
