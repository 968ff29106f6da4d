// SPDX-License-Identifier: MPL-2.0
//! Directory listing port.

use crate::domain::media::MediaRef;
use crate::error::Result;
use std::path::Path;

/// Port for turning a folder into an ordered list of playable media.
pub trait DirectoryLister {
    /// Lists the playable files under `path`, in playback order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) if `path` cannot be
    /// read. An empty result is not an error at this level.
    fn list_files(&self, path: &Path) -> Result<Vec<MediaRef>>;
}
