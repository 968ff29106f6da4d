// SPDX-License-Identifier: MPL-2.0
//! Immutable, non-empty playback order.

use crate::application::port::DirectoryLister;
use crate::domain::media::MediaRef;
use crate::error::{ConfigurationError, Error, Result};
use std::ops::Index;
use std::path::Path;

/// Ordered list of media built once at startup.
///
/// A playlist is never empty, so index 0 is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<MediaRef>,
}

impl Playlist {
    /// Builds a playlist from the lister output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyPlaylist`] when `entries` is empty.
    pub fn build(entries: Vec<MediaRef>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ConfigurationError::EmptyPlaylist.into());
        }
        Ok(Self { entries })
    }

    /// Lists `folder` with `lister` and builds the playlist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnreadableFolder`] when the folder cannot
    /// be listed and [`ConfigurationError::EmptyPlaylist`] when it holds no
    /// playable file.
    pub fn from_folder(lister: &dyn DirectoryLister, folder: &Path) -> Result<Self> {
        let entries = lister.list_files(folder).map_err(|err| match err {
            Error::Io(reason) => ConfigurationError::UnreadableFolder {
                path: folder.to_path_buf(),
                reason,
            }
            .into(),
            other => other,
        })?;
        Self::build(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaRef> {
        self.entries.get(index)
    }

    /// Index of the last entry.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaRef> {
        self.entries.iter()
    }
}

impl Index<usize> for Playlist {
    type Output = MediaRef;

    fn index(&self, index: usize) -> &MediaRef {
        &self.entries[index]
    }
}
