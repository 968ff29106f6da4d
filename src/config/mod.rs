// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - top level: `language`
//! - `[playback]`: video folder, sort order, autoplay, preloading, poll interval
//! - `[display]`: fullscreen at startup and theme
//!
//! Every field has a default, so a partial or empty file is valid.
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config::{self, Config};
//!
//! let (mut config, _warning) = config::load_with_override(None);
//! config.playback.autoplay = true;
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Order in which the folder's videos are played.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Folder scanned for videos when none is given on the command line.
    pub folder: PathBuf,

    pub sort_order: SortOrder,

    /// Start the first video as soon as it is ready.
    pub autoplay: bool,

    /// Create a player for every video at startup instead of on first visit.
    pub preload_all: bool,

    /// Backend poll interval in milliseconds. See [`PlaybackConfig::tick_interval`].
    pub tick_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_VIDEO_FOLDER),
            sort_order: SortOrder::default(),
            autoplay: false,
            preload_all: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl PlaybackConfig {
    /// Poll interval clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub start_fullscreen: bool,
    pub theme: ThemeMode,
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    pub playback: PlaybackConfig,

    pub display: DisplayConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns the config and an optional warning key. A missing file yields the
/// defaults silently; an unreadable or invalid one yields the defaults plus
/// `notification-config-load-error`.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem errors and [`Error::Config`] if the
/// config cannot be serialized.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

/// Stores `folder` as the default playback folder when it differs from the
/// current one, so the next run without a folder argument reopens it.
///
/// Returns whether the settings file was written.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn remember_folder(
    config: &mut Config,
    folder: &Path,
    base_dir: Option<PathBuf>,
) -> Result<bool> {
    if config.playback.folder == folder {
        return Ok(false);
    }
    config.playback.folder = folder.to_path_buf();
    save_with_override(config, base_dir)?;
    Ok(true)
}
