//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the quadro application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::BoardConfig;
use crate::error::{ConfigError, Result};
use crate::log::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Overrides `log.filter`.
pub const ENV_LOG: &str = "QUADRO_LOG";
/// Overrides `log.file`.
pub const ENV_LOG_FILE: &str = "QUADRO_LOG_FILE";
/// Overrides `ui.mouse`.
pub const ENV_MOUSE: &str = "QUADRO_MOUSE";

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether to capture the mouse. Drag and drop needs it.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: default_mouse(),
        }
    }
}

/// The main configuration struct for the quadro application.
///
/// # Examples
///
/// ```
/// use quadro_config::{Config, IdStrategy};
///
/// let config = Config::default();
/// assert!(config.board.sample_cards);
/// assert_eq!(config.board.ids, IdStrategy::Sequential);
/// assert!(config.ui.mouse);
/// assert_eq!(config.log.filter, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Board startup settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Terminal UI settings.
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default file locations and the
    /// process environment.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./quadro.json5` or `./quadro.json`
    /// 2. User: `~/.config/quadro/config.json5` or `~/.config/quadro/config.json`
    ///
    /// If no configuration file is found, the defaults are used. `QUADRO_*`
    /// environment variables are applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is malformed, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quadro_config::Config;
    ///
    /// # fn example() -> quadro_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Mouse enabled: {}", config.ui.mouse);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// fails validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies `QUADRO_*` overrides looked up through `lookup`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `QUADRO_MOUSE` is not one of
    /// `0`, `1`, `true` or `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::Config;
    ///
    /// let config = Config::default()
    ///     .with_env_overrides(|name| match name {
    ///         "QUADRO_LOG" => Some("debug".to_string()),
    ///         "QUADRO_MOUSE" => Some("0".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.log.filter, "debug");
    /// assert!(!config.ui.mouse);
    /// ```
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(filter) = lookup(ENV_LOG) {
            self.log.filter = filter;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.log.file = Some(PathBuf::from(file));
        }
        if let Some(value) = lookup(ENV_MOUSE) {
            self.ui.mouse = parse_flag(&value).ok_or(ConfigError::InvalidEnv {
                name: ENV_MOUSE,
                value,
            })?;
        }
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log filter is empty.
    pub fn validate(&self) -> Result<()> {
        self.log.validate()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::IdStrategy;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"board": {"sample_cards": false}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.board.sample_cards);
        assert!(config.ui.mouse);
    }

    #[test]
    fn env_overrides_apply_on_top() {
        let config = Config::default()
            .with_env_overrides(|name| match name {
                ENV_LOG_FILE => Some("/tmp/q.log".to_string()),
                ENV_MOUSE => Some("TRUE".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/q.log")));
        assert!(config.ui.mouse);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = Config::default()
            .with_env_overrides(|_| Some(String::new()))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_mouse_flag_is_rejected() {
        let err = Config::default()
            .with_env_overrides(|name| (name == ENV_MOUSE).then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { name: ENV_MOUSE, ref value } if value == "maybe"
        ));
    }

    #[test]
    fn no_overrides_keeps_config() {
        let config = Config::default().with_env_overrides(no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                board: { sample_cards: false, ids: "clock" },
                ui: { mouse: false },
                log: { filter: "quadro_tui=debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.board.sample_cards);
        assert_eq!(config.board.ids, IdStrategy::Clock);
        assert!(!config.ui.mouse);
        assert_eq!(config.log.filter, "quadro_tui=debug");
    }

    #[test]
    fn load_from_rejects_empty_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log": {"filter": ""}}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::EmptyLogFilter)
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config::default();
        original.board.ids = IdStrategy::Clock;
        original.log.file = Some(dir.path().join("quadro.log"));

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }
}
