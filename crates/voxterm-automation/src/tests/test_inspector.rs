use crate::catalog::TerminalCatalog;
use crate::inspector::ProcessInspector;
use crate::tests::mock_channel::MockChannel;
use crate::AutomationChannel;
use std::sync::Arc;

fn inspector_with_channel() -> (Arc<MockChannel>, ProcessInspector) {
    let channel = Arc::new(MockChannel::new());
    let inspector = ProcessInspector::new(
        Arc::clone(&channel) as Arc<dyn AutomationChannel>,
        Arc::new(TerminalCatalog::builtin()),
    );
    (channel, inspector)
}

#[tokio::test]
async fn only_confirmed_running_entries_are_listed() {
    let (channel, inspector) = inspector_with_channel();
    channel.set_running(&["iTerm2", "kitty"]);

    let running = inspector.list_running_terminal_apps().await;
    let names: Vec<&str> = running.iter().map(|a| a.process_name.as_str()).collect();
    assert_eq!(names, vec!["iTerm2", "kitty"]);
}

#[tokio::test]
async fn results_follow_catalog_order_not_query_order() {
    let (channel, inspector) = inspector_with_channel();
    channel.set_running(&["kitty", "Terminal"]);

    let running = inspector.list_running_terminal_apps().await;
    let names: Vec<&str> = running.iter().map(|a| a.process_name.as_str()).collect();
    // Terminal precedes kitty in the catalog.
    assert_eq!(names, vec!["Terminal", "kitty"]);
}

#[tokio::test]
async fn nothing_running_yields_an_empty_list() {
    let (_channel, inspector) = inspector_with_channel();
    assert!(inspector.list_running_terminal_apps().await.is_empty());
}

#[tokio::test]
async fn per_entry_query_failures_do_not_abort_the_scan() {
    let (channel, inspector) = inspector_with_channel();
    channel.set_running(&["Terminal", "iTerm2"]);
    channel.fail_process_query_for("Terminal");

    let running = inspector.list_running_terminal_apps().await;
    let names: Vec<&str> = running.iter().map(|a| a.process_name.as_str()).collect();
    // The unanswerable entry is excluded; the rest of the scan proceeds.
    assert_eq!(names, vec!["iTerm2"]);
}
