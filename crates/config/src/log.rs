//! Logging settings.
//!
//! The terminal belongs to the TUI, so log output always goes to a file.
//! Unless configured otherwise that file lives in the user cache directory,
//! typically `~/.cache/quadro/quadro.log` on Linux.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Name of the log file inside the cache directory.
const LOG_FILE_NAME: &str = "quadro.log";

/// Logging configuration.
///
/// # Examples
///
/// ```
/// use quadro_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert_eq!(config.filter, "info");
/// assert!(config.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"quadro_tui=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Log file path. Falls back to the cache directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Returns the file log output should be written to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if no file is configured and
    /// the cache directory cannot be determined.
    pub fn resolved_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => dirs::cache_dir()
                .map(|dir| dir.join("quadro").join(LOG_FILE_NAME))
                .ok_or(ConfigError::NoHomeDirectory),
        }
    }

    /// Checks the filter directive is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogFilter`] for a blank filter.
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
