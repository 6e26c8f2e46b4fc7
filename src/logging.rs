//! Tracing subscriber setup for the `moodsync` binary.
//!
//! Logs always go to stderr so stdout carries only command output. With
//! `logging.log_to_file` set, a daily rolling file under
//! [`crate::moodsync_dirs::logs_dir`] is added.

use crate::config::LoggingConfig;
use crate::error::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Rolling log file prefix; files are named `moodsync.log.YYYY-MM-DD`.
pub const LOG_FILE_PREFIX: &str = "moodsync.log";

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; hold it for
/// the life of the process or buffered lines are lost on exit.
///
/// # Errors
///
/// Returns an error if the logs directory cannot be created.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    init_in(config, &crate::moodsync_dirs::logs_dir())
}

/// [`init`] with an explicit logs directory.
///
/// # Errors
///
/// Returns an error if `logs_dir` cannot be created.
pub fn init_in(config: &LoggingConfig, logs_dir: &Path) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    if !config.log_to_file {
        // A subscriber may already be installed (tests, embedding apps).
        let _ = Registry::default()
            .with(env_filter(config))
            .with(console_layer)
            .try_init();
        return Ok(None);
    }

    std::fs::create_dir_all(logs_dir)?;
    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_target(true)
        .with_writer(non_blocking)
        .with_ansi(false);

    let _ = Registry::default()
        .with(env_filter(config))
        .with(console_layer)
        .with(file_layer)
        .try_init();

    tracing::info!(logs_dir = %logs_dir.display(), "file logging enabled");
    Ok(Some(guard))
}
