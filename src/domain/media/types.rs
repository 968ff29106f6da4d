// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.

use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions (lowercase) recognised as playable videos.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Opaque locator for one playable file.
///
/// Built once by the directory lister and never mutated afterwards.
///
/// # Example
///
/// ```
/// use iced_reel::domain::media::MediaRef;
///
/// let media = MediaRef::new("Videos/intro.mp4");
/// assert_eq!(media.file_name(), "intro.mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Returns the final path component, or the whole path when it has none.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for MediaRef {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

/// Checks the extension of `path` against [`VIDEO_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
