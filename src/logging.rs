//! Tracing subscriber setup.
//!
//! The TUI owns stdout and stderr while it runs, so events are written to
//! the configured log file without ANSI colors.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use quadro_config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber and returns the file it writes to.
///
/// # Errors
///
/// Returns an error if the filter directive does not parse, or if the log
/// file or its directory cannot be created.
pub fn init(config: &LogConfig) -> anyhow::Result<PathBuf> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))?;

    let path = config.resolved_file()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(path)
}
