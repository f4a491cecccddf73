// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_STORE_DATA_DIR`, `FOLIO_STORE_CONFIG_DIR`), ignored when empty
//! 4. **Platform default** - via `dirs` crate, with the application name appended
//!
//! # Usage
//!
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
//! let state_dir = paths::get_app_data_dir();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FolioStore";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_STORE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_STORE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--data-dir` / `--config-dir` for the rest of the process.
///
/// Returns `false` if overrides were already set; the first values stay in
/// effect.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        log::warn!("event=cli_overrides status=ignored reason=already_initialized");
    }
    data_set && config_set
}

fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory of the key-value state file (language preference, content
/// snapshot).
///
/// - Linux: `~/.local/share/FolioStore/`
/// - macOS: `~/Library/Application Support/FolioStore/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\FolioStore\`
///
/// Returns `None` if no data directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory of `settings.toml`.
///
/// - Linux: `~/.config/FolioStore/`
/// - macOS: `~/Library/Application Support/FolioStore/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\FolioStore\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
