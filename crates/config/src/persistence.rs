//! Configuration file reading and writing.
//!
//! Files are read as JSON5 (plain JSON is a subset) and written back as
//! pretty-printed JSON, since `serde_json5` cannot serialize.
//!
//! # File Locations
//!
//! 1. Local: `./quadro.json5` or `./quadro.json`
//! 2. User: `~/.config/quadro/config.json5` or `~/.config/quadro/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["quadro.json5", "quadro.json"];

/// Application directory under the user config directory.
const APP_DIR: &str = "quadro";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every candidate config path, highest priority first.
///
/// `user_config_dir` is the platform config directory (for example
/// `~/.config`), not the application's own subdirectory.
#[must_use]
pub fn search_paths(local_dir: &Path, user_config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(APP_DIR).join(name)));
    local.chain(user).collect()
}

/// Finds the first existing configuration file.
///
/// # Examples
///
/// ```no_run
/// use quadro_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir();
    search_paths(Path::new("."), user_dir.as_deref())
        .into_iter()
        .find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value to a file as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot
/// be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn search_order_prefers_local_json5() {
        let paths = search_paths(Path::new("/work"), Some(Path::new("/home/u/.config")));
        assert_eq!(
            paths,
            [
                PathBuf::from("/work/quadro.json5"),
                PathBuf::from("/work/quadro.json"),
                PathBuf::from("/home/u/.config/quadro/config.json5"),
                PathBuf::from("/home/u/.config/quadro/config.json"),
            ]
        );
    }

    #[test]
    fn search_without_user_dir_is_local_only() {
        assert_eq!(search_paths(Path::new("."), None).len(), 2);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comment
                name: "board",
                value: 3,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.name, "board");
        assert_eq!(sample.value, 3);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/quadro.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { ref path, .. } if path.ends_with("quadro.json")));
    }

    #[test]
    fn read_invalid_content_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not valid json").unwrap();

        assert!(matches!(
            read_config_file::<Sample>(&path),
            Err(ConfigError::ParseJson5(_))
        ));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let sample = Sample {
            name: "board".to_string(),
            value: 1,
        };

        write_config_file(&path, &sample).unwrap();
        assert_eq!(read_config_file::<Sample>(&path).unwrap(), sample);
    }
}
