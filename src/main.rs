//! tradui binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod catalog;
mod events;
mod files;
mod logic;
mod net;
mod pipeline;
mod prefs;
mod state;
mod theme;
mod ui;
mod util;

use std::sync::OnceLock;

use clap::Parser;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize the tracing logger writing to the state directory, falling
/// back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = prefs::state_dir();
    log_path.push("tradui.log");
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args.log_level);

    tracing::info!("tradui starting");
    if let Err(err) = app::run(args).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("tradui exited");
}
