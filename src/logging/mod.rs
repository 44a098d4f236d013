//! Application logging functionality
//!
//! Sets up the tracing subscriber and optional log files

use crate::core::config::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "ztheme.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Get the path to today's log file
///
/// Matches the naming of the daily rolling appender.
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("{}.{}", LOG_FILE_PREFIX, timestamp))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "ztheme=debug"
    } else {
        "ztheme=warn"
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr so they never mix with theme output on stdout. With
/// `log_to_file`, they are also written to a daily file under
/// ~/.config/ztheme/logs; keep the returned guard alive until exit so the
/// file writer is flushed.
pub fn init_logging(verbose: bool, log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let (file_layer, guard) = if log_to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(logs_dir(), LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    if log_to_file {
        tracing::info!(
            "=== ztheme started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        tracing::info!("Logs written to: {:?}", current_log_file());
    }

    Ok(guard)
}
