// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Folder scanned when neither the command line nor the config names one.
pub const DEFAULT_VIDEO_FOLDER: &str = "Videos";

/// Default interval between backend polls, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Fastest allowed poll interval (about one frame at 60 Hz).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest allowed poll interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long an info toast stays on screen, in seconds.
pub const DEFAULT_TOAST_SECS: u64 = 3;

/// How long an error toast stays on screen, in seconds.
pub const ERROR_TOAST_SECS: u64 = 6;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;
