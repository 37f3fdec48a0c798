// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`TAPSEEK_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "tapseek";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TAPSEEK_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; returns false for later calls.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
