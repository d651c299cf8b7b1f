use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use voxterm_app::config::AppConfig;
use voxterm_app::runtime;
use voxterm_automation::{
    AutomationChannel, ClipboardBridge, FrontmostTracker, InjectionDispatcher, NoOpChannel,
    ScriptChannel, SystemClipboard, TerminalCatalog,
};
use voxterm_formatter::{FormattingService, PassthroughFormatter};
use voxterm_foundation::{real_clock, AppState, ShutdownHandler, StateManager};

fn init_logging() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "voxterm.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("Starting VoxTerm");

    let config_path = std::env::var_os("VOXTERM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("voxterm.toml"));
    let config = AppConfig::load_or_default(&config_path)?;

    let state_manager = StateManager::new();
    let shutdown = ShutdownHandler::new().install().await;

    let catalog = Arc::new(match &config.catalog_path {
        Some(path) => TerminalCatalog::load(path)?,
        None => TerminalCatalog::builtin(),
    });
    tracing::info!("Terminal catalog loaded with {} entries", catalog.len());

    let channel: Arc<dyn AutomationChannel> = if config.automation_enabled {
        Arc::new(ScriptChannel::new(config.automation.script_timeout_ms))
    } else {
        tracing::warn!("OS automation disabled by configuration; running inert");
        Arc::new(NoOpChannel::new())
    };
    let clipboard: Arc<dyn ClipboardBridge> = Arc::new(SystemClipboard::new());
    let clock = real_clock();

    let mut dispatcher = InjectionDispatcher::new(
        Arc::clone(&channel),
        clipboard,
        Arc::clone(&catalog),
        Arc::clone(&clock),
        config.automation.clone(),
    );
    let mut tracker_handle = None;
    if config.automation_enabled && config.automation.track_frontmost {
        let tracker = Arc::new(FrontmostTracker::new(channel, catalog, clock));
        tracker_handle = Some(Arc::clone(&tracker).spawn());
        dispatcher = dispatcher.with_tracker(tracker);
        tracing::info!("Frontmost-terminal tracking started");
    }
    let dispatcher = Arc::new(dispatcher);

    // The default build reformats with the passthrough implementation; a
    // host application substitutes its AI-backed formatter here.
    let formatter = config
        .formatting
        .enabled
        .then(|| FormattingService::new(Arc::new(PassthroughFormatter::new())));

    // Dictated lines arrive on stdin in place of the external STT pipeline.
    let (line_tx, line_rx) = mpsc::channel::<String>(100);
    let reader_shutdown = shutdown.clone();
    let reader_handle = tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    if line_tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    tracing::info!("Input closed, requesting shutdown");
                    reader_shutdown.trigger();
                    break;
                }
                Err(e) => {
                    tracing::warn!("Input read failed: {}", e);
                    reader_shutdown.trigger();
                    break;
                }
            }
        }
    });

    state_manager.transition(AppState::Running)?;
    runtime::run_pipeline(
        Arc::clone(&dispatcher),
        formatter,
        config.formatting.clone(),
        line_rx,
        shutdown,
    )
    .await;

    tracing::info!("Beginning graceful shutdown");
    state_manager.transition(AppState::Stopping)?;
    reader_handle.abort();
    if let Some(handle) = tracker_handle {
        handle.abort();
    }

    let metrics = dispatcher.metrics_snapshot();
    tracing::info!(
        attempts = metrics.attempts,
        successes = metrics.successes,
        rejections = metrics.gate_rejections,
        permission_denials = metrics.permission_denials,
        no_target = metrics.no_target,
        "Final dispatch metrics"
    );

    state_manager.transition(AppState::Stopped)?;
    tracing::info!("Shutdown complete");
    Ok(())
}
