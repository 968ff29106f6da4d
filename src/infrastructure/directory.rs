// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapter implementing the [`DirectoryLister`] port.
//!
//! The folder is walked recursively. Regular files with a known video
//! extension are kept and sorted according to the configured [`SortOrder`].
//! Symlinked directories are not followed, so a link cycle cannot hang the
//! walk.

use crate::application::port::DirectoryLister;
use crate::config::SortOrder;
use crate::domain::media::{is_video_path, MediaRef};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister {
    sort_order: SortOrder,
}

impl FsDirectoryLister {
    #[must_use]
    pub fn new(sort_order: SortOrder) -> Self {
        Self { sort_order }
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list_files(&self, path: &Path) -> Result<Vec<MediaRef>> {
        let mut media_files = Vec::new();
        // The root must be readable; subdirectories are best effort.
        collect_videos(path, &mut media_files)?;
        sort_media_files(&mut media_files, self.sort_order);
        debug!(
            folder = %path.display(),
            count = media_files.len(),
            "listed video folder"
        );
        Ok(media_files.into_iter().map(MediaRef::new).collect())
    }
}

fn collect_videos(directory: &Path, media_files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            if let Err(err) = collect_videos(&path, media_files) {
                warn!(folder = %path.display(), error = %err, "skipping unreadable subfolder");
            }
        } else if path.is_file() && is_video_path(&path) {
            media_files.push(path);
        }
    }
    Ok(())
}

/// Sorts video paths according to the specified sort order.
///
/// Alphabetical order compares whole paths, so files of one subfolder stay
/// together. Files whose timestamps cannot be read sort first.
fn sort_media_files(media_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => media_files.sort(),
        SortOrder::ModifiedDate => {
            media_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.clone())
            });
        }
        SortOrder::CreatedDate => {
            media_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.clone())
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("failed to create test file");
        file.write_all(b"fake video data")
            .expect("failed to write test file");
        path
    }

    fn names(list: &[MediaRef]) -> Vec<String> {
        list.iter().map(MediaRef::file_name).collect()
    }

    #[test]
    fn keeps_only_video_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.mp4");
        create_test_file(temp_dir.path(), "b.MKV");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "cover.jpg");

        let list = FsDirectoryLister::default()
            .list_files(temp_dir.path())
            .expect("failed to list folder");

        assert_eq!(names(&list), ["a.mp4", "b.MKV"]);
    }

    #[test]
    fn sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "c.mp4");
        create_test_file(temp_dir.path(), "a.mp4");
        create_test_file(temp_dir.path(), "b.webm");

        let list = FsDirectoryLister::new(SortOrder::Alphabetical)
            .list_files(temp_dir.path())
            .expect("failed to list folder");

        assert_eq!(names(&list), ["a.mp4", "b.webm", "c.mp4"]);
    }

    #[test]
    fn walks_subfolders() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("act2");
        fs::create_dir(&nested).expect("failed to create subfolder");
        create_test_file(temp_dir.path(), "intro.mp4");
        create_test_file(&nested, "finale.mov");

        let list = FsDirectoryLister::default()
            .list_files(temp_dir.path())
            .expect("failed to list folder");

        assert_eq!(names(&list), ["finale.mov", "intro.mp4"]);
        assert!(list[0].path().starts_with(&nested));
    }

    #[test]
    fn sorts_by_modified_date() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let newer = create_test_file(temp_dir.path(), "a.mp4");
        let older = create_test_file(temp_dir.path(), "b.mp4");

        let base = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&older)
            .and_then(|f| f.set_modified(base))
            .expect("failed to set mtime");
        File::options()
            .write(true)
            .open(&newer)
            .and_then(|f| f.set_modified(base + Duration::from_secs(60)))
            .expect("failed to set mtime");

        let list = FsDirectoryLister::new(SortOrder::ModifiedDate)
            .list_files(temp_dir.path())
            .expect("failed to list folder");

        assert_eq!(names(&list), ["b.mp4", "a.mp4"]);
    }

    #[test]
    fn empty_folder_yields_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list = FsDirectoryLister::default()
            .list_files(temp_dir.path())
            .expect("failed to list folder");
        assert!(list.is_empty());
    }

    #[test]
    fn missing_folder_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = FsDirectoryLister::default().list_files(&temp_dir.path().join("absent"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
