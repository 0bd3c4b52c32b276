//! Log sink setup
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is configured.

use crate::config::LoggingConfig;
use crate::{Error, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// The returned guard flushes the background writer when dropped and must be
/// kept alive until the program exits.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let Some(file) = config.file.as_deref() else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| Error::Config(format!("Invalid logging.level: {}", e)))?;

    let (dir, name) = split_log_path(file)?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;

    Ok(Some(guard))
}

fn split_log_path(file: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let name = file
        .file_name()
        .ok_or_else(|| Error::Config(format!("Log file has no name: {}", file.display())))?;
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, name))
}
