//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured filter. The terminal UI owns the screen,
//! so it logs to a file through a non-blocking writer; everything else logs to
//! stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "wordle.log";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr
pub fn init_stderr(default_filter: &str) {
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `<dir>/wordle.log`
///
/// Keep the returned guard alive for as long as logging is needed; dropping it
/// flushes and stops the writer thread.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_file(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    tracing::info!(log_file = %dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}
