//! # Window Enumerator
//!
//! Lists the open windows of running terminal applications through the
//! generic automation channel. Titles can change between calls, so they are
//! recomputed every time and never cached.

use crate::constants::{
    WINDOW_TITLE_DISPLAY_LIMIT, WINDOW_TITLE_ELLIPSIS, WINDOW_TITLE_TRUNCATED_LEN,
};
use crate::inspector::ProcessInspector;
use crate::types::{TerminalApp, TerminalWindow};
use crate::AutomationChannel;
use std::sync::Arc;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Truncate a window title for display. The full title is kept elsewhere for
/// targeting; only the display copy is shortened. Grapheme-aware so a
/// truncation never splits a combined character.
fn display_title(title: &str) -> String {
    let graphemes: Vec<&str> = title.graphemes(true).collect();
    if graphemes.len() <= WINDOW_TITLE_DISPLAY_LIMIT {
        return title.to_string();
    }
    let mut out: String = graphemes[..WINDOW_TITLE_TRUNCATED_LEN].concat();
    out.push_str(WINDOW_TITLE_ELLIPSIS);
    out
}

pub struct WindowEnumerator {
    channel: Arc<dyn AutomationChannel>,
}

impl WindowEnumerator {
    pub fn new(channel: Arc<dyn AutomationChannel>) -> Self {
        Self { channel }
    }

    /// Windows of one running app, with 1-based enumeration-order indices.
    /// Zero discoverable windows or a channel error both yield an empty list;
    /// placeholder windows are never synthesized.
    pub async fn list_windows(&self, app: &TerminalApp) -> Vec<TerminalWindow> {
        let titles = match self.channel.list_window_titles(&app.process_name).await {
            Ok(titles) => titles,
            Err(e) => {
                debug!("Window enumeration for {} failed: {}", app.process_name, e);
                return Vec::new();
            }
        };

        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| TerminalWindow {
                process_name: app.process_name.clone(),
                app_id: app.app_id.clone(),
                display_name: display_title(&title),
                window_name: title,
                index: i + 1,
            })
            .collect()
    }

    /// All windows of all running catalog apps, concatenated in catalog
    /// order.
    pub async fn list_all_windows(&self, inspector: &ProcessInspector) -> Vec<TerminalWindow> {
        let mut windows = Vec::new();
        for app in inspector.list_running_terminal_apps().await {
            windows.extend(self.list_windows(&app).await);
        }
        windows
    }
}
