//! Error types for the quadro-config crate.
//!
//! Everything that can go wrong between locating a config file and handing
//! a validated [`Config`](crate::Config) to the application.

use std::path::PathBuf;

/// Errors raised while loading, overriding, validating or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// File that was being read.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A config file or its directory could not be written.
    #[error("cannot write {path}: {source}")]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON5, or does not match the expected shape.
    #[error("malformed config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Settings could not be turned into JSON for saving.
    #[error("cannot serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A `QUADRO_*` variable held a value that could not be used.
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// `log.filter` is blank.
    #[error("log filter must not be empty")]
    EmptyLogFilter,

    /// Neither a config nor a cache directory could be found for the user.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
