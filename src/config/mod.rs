// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Startup language
//! - `[content]` - Baseline language and content directory
//! - `[storage]` - Snapshot persistence
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_STORE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_store::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when `settings.toml` exists but cannot be loaded.
pub const WARNING_CONFIG_LOAD: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language to switch to after the stored preference is restored
    /// (e.g., "fr"). `--lang` on the command line takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where content documents come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Code of the baseline document.
    #[serde(
        default = "default_baseline_language",
        skip_serializing_if = "Option::is_none"
    )]
    pub baseline_language: Option<String>,

    /// Directory holding `languages.json` and the `data*.json` documents.
    /// When unset, the documents built into the binary are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            baseline_language: default_baseline_language(),
            dir: None,
        }
    }
}

impl ContentConfig {
    #[must_use]
    pub fn baseline_language(&self) -> &str {
        self.baseline_language
            .as_deref()
            .unwrap_or(DEFAULT_BASELINE_LANGUAGE)
    }
}

/// Snapshot persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Write the full document to storage on every change.
    #[serde(
        default = "default_persist_snapshots",
        skip_serializing_if = "Option::is_none"
    )]
    pub persist_snapshots: Option<bool>,

    /// Start from the stored snapshot instead of the shipped document.
    #[serde(
        default = "default_restore_snapshot",
        skip_serializing_if = "Option::is_none"
    )]
    pub restore_snapshot: Option<bool>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist_snapshots: default_persist_snapshots(),
            restore_snapshot: default_restore_snapshot(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_baseline_language() -> Option<String> {
    Some(DEFAULT_BASELINE_LANGUAGE.to_string())
}

fn default_persist_snapshots() -> Option<bool> {
    Some(DEFAULT_PERSIST_SNAPSHOTS)
}

fn default_restore_snapshot() -> Option<bool> {
    Some(DEFAULT_RESTORE_SNAPSHOT)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be loaded, returns the default config and a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!(
                        "event=config_load status=defaulted path={} error=\"{err}\"",
                        path.display()
                    );
                    return (
                        Config::default(),
                        Some(WARNING_CONFIG_LOAD.to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            content: ContentConfig {
                baseline_language: Some("en".to_string()),
                dir: Some(PathBuf::from("/srv/portfolio/content")),
            },
            storage: StorageConfig {
                persist_snapshots: Some(false),
                restore_snapshot: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[storage\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(WARNING_CONFIG_LOAD));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"pt-BR\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("pt-BR"));
        assert_eq!(config.content.baseline_language(), DEFAULT_BASELINE_LANGUAGE);
        assert_eq!(config.storage.persist_snapshots, Some(DEFAULT_PERSIST_SNAPSHOTS));
        assert_eq!(config.storage.restore_snapshot, Some(DEFAULT_RESTORE_SNAPSHOT));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
