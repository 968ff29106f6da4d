// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. Explicit override (the `--config-dir` argument, or a test directory)
//! 2. `ICED_REEL_CONFIG_DIR` environment variable, if set and non-empty
//! 3. Platform config directory with the app name appended:
//!    - Linux: `~/.config/IcedReel/`
//!    - macOS: `~/Library/Application Support/IcedReel/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\IcedReel\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_REEL_CONFIG_DIR";

/// Returns the config directory, or `None` when the platform has none.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
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
