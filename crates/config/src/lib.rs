//! Configuration management for the quadro application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`board`]: Board startup settings
//! - [`log`]: Log filter and log file location
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`QUADRO_LOG`, `QUADRO_LOG_FILE`, `QUADRO_MOUSE`)
//! 2. Local config (`./quadro.json5` or `./quadro.json`)
//! 3. User config (`~/.config/quadro/config.json5` or `~/.config/quadro/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   board: { sample_cards: true, ids: "sequential" },
//!   ui: { mouse: true },
//!   log: { filter: "info", file: "/tmp/quadro.log" },
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod log;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use board::{BoardConfig, IdStrategy};
pub use config::{Config, UiConfig};
pub use error::{ConfigError, Result};
pub use log::LogConfig;
