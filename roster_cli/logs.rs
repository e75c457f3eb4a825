use anyhow::Context;
use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info,roster_app=debug,roster_db=debug,roster=debug";

/// Sets up the logging configuration for the application.
///
/// This function initializes `tracing_subscriber` with two layers:
/// 1. A layer that logs to a daily rotating `roster.<date>.log` in `log_dir`.
/// 2. A layer that logs to stderr, only when `RUST_LOG` is set.
///
/// Stderr belongs to error documents by default, so the console stays quiet
/// unless asked. The file layer uses `RUST_LOG` too, falling back to `info`
/// for all crates and `debug` for the roster crates.
///
/// Fails when the log directory cannot be created. The returned guard flushes
/// the file writer when dropped; keep it alive for the whole run.
pub fn setup_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    // File appender for daily log rotation
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("roster")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("unable to open log directory {}", log_dir.display()))?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // File layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter().unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER)));

    // Console layer
    let console_layer = env_filter().map(|filter| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_thread_ids(true)
            .with_target(true)
            .with_filter(filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}

fn env_filter() -> Option<EnvFilter> {
    EnvFilter::try_from_default_env().ok()
}
