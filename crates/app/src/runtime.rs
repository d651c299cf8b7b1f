//! Runtime wiring: dictated lines flow through the optional reformatting
//! pass into the injection dispatcher. The speech-to-text pipeline is an
//! external collaborator; any line source (stdin in the default binary)
//! stands in for it.

use crate::config::FormattingConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use voxterm_automation::types::PasteResult;
use voxterm_automation::InjectionDispatcher;
use voxterm_formatter::{FormatRequest, FormattingService};
use voxterm_foundation::ShutdownSignal;

const STATS_INTERVAL_SECS: u64 = 30;

/// Pump lines through formatter and dispatcher until the source closes or
/// shutdown is requested.
pub async fn run_pipeline(
    dispatcher: Arc<InjectionDispatcher>,
    formatter: Option<FormattingService>,
    formatting: FormattingConfig,
    mut lines: mpsc::Receiver<String>,
    shutdown: ShutdownSignal,
) {
    let mut stats_interval = tokio::time::interval(Duration::from_secs(STATS_INTERVAL_SECS));
    loop {
        tokio::select! {
            _ = shutdown.wait() => {
                info!("Shutdown signal received");
                break;
            }
            _ = stats_interval.tick() => {
                let m = dispatcher.metrics_snapshot();
                info!(
                    attempts = m.attempts,
                    successes = m.successes,
                    rejections = m.gate_rejections,
                    "dispatch stats"
                );
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("Input source closed");
                    break;
                };
                let text = match &formatter {
                    Some(service) => reformat(service, &formatting, line).await,
                    None => line,
                };
                let result = dispatcher.dispatch_to_most_recent_terminal(&text).await;
                report(&result);
            }
        }
    }
}

async fn reformat(service: &FormattingService, config: &FormattingConfig, line: String) -> String {
    let mut request = FormatRequest::transcript(line);
    if let Some(instructions) = &config.instructions {
        request = request.with_instructions(instructions.clone());
    }
    if let Some(model) = &config.model {
        request = request.with_model(model.clone());
    }
    let formatted = service.format(request).await;
    if formatted.fallback {
        debug!("Formatter fell back to the original text");
    }
    formatted.text
}

fn report(result: &PasteResult) {
    if result.success {
        info!(target_app = ?result.target_app, "Dispatch succeeded");
    } else if result.needs_permission {
        warn!(
            "Automation permission needed: grant access in \
             System Settings > Privacy & Security > Accessibility, then retry"
        );
    } else if result.copied {
        info!("Dispatch did not complete; the text is on the clipboard for manual paste");
    } else {
        debug!("Dispatch rejected");
    }
}
