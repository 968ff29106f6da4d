// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only [`Error::Configuration`] is fatal: it stops the process before the
//! window opens. Every other variant is recovered where it happens and at most
//! surfaces as a toast or a log line.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The video folder cannot produce a valid playlist.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Navigation tried to step past either end of the playlist.
    #[error(transparent)]
    NavigationBoundary(#[from] NavigationBoundary),

    /// A play/pause/seek request reached a session before the backend
    /// reported it ready.
    #[error("playback session {index} is not ready yet")]
    BackendNotReady { index: usize },

    /// A key without an assigned command.
    #[error("{0} has not been assigned a function")]
    UnrecognizedInput(String),

    /// The media backend reported a failure for the active item.
    #[error("media backend failure: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for errors that must stop the process.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Returns the i18n key used when the error is shown to the user, or
    /// `None` for errors that are only logged.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Error::Configuration(err) => Some(err.i18n_key()),
            Error::NavigationBoundary(boundary) => Some(boundary.i18n_key()),
            Error::Backend(_) => Some("notification-backend-error"),
            Error::BackendNotReady { .. }
            | Error::UnrecognizedInput(_)
            | Error::Io(_)
            | Error::Config(_) => None,
        }
    }
}

/// Reasons the video folder cannot be turned into a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no playable videos found")]
    EmptyPlaylist,

    #[error("cannot read video folder {}: {reason}", path.display())]
    UnreadableFolder { path: PathBuf, reason: String },
}

impl ConfigurationError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConfigurationError::EmptyPlaylist => "error-empty-folder",
            ConfigurationError::UnreadableFolder { .. } => "error-unreadable-folder",
        }
    }
}

/// Which end of the playlist a navigation request ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationBoundary {
    #[error("no more videos in folder")]
    NoMoreVideosForward,

    #[error("no more previous videos")]
    NoMorePreviousVideos,
}

impl NavigationBoundary {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            NavigationBoundary::NoMoreVideosForward => "notification-no-more-videos",
            NavigationBoundary::NoMorePreviousVideos => "notification-no-previous-videos",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
