// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`DurationProbe`] trait.
//!
//! Only container metadata is read; no frame is decoded.
//!
//! [`DurationProbe`]: crate::infrastructure::clock_backend::DurationProbe

use crate::domain::media::MediaRef;
use crate::error::{Error, Result};
use crate::infrastructure::clock_backend::{DurationProbe, ProbeResult};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Outcome of the one-time `FFmpeg` initialization, failures included.
static FFMPEG_INIT: OnceLock<Result<()>> = OnceLock::new();

/// Initialize `FFmpeg` with appropriate log level.
///
/// Safe to call multiple times. The log level is set to ERROR to suppress
/// warnings such as "Detected creation time before 1970". A failed first
/// initialization is reported again on every later call.
///
/// # Errors
///
/// Returns [`Error::Io`] if the library fails to initialize.
pub fn init_ffmpeg() -> Result<()> {
    init_once(&FFMPEG_INIT, || {
        ffmpeg_next::init()
            .map_err(|e| Error::Io(format!("FFmpeg initialization failed: {e}")))?;

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
        Ok(())
    })
}

fn init_once(cell: &OnceLock<Result<()>>, init: impl FnOnce() -> Result<()>) -> Result<()> {
    cell.get_or_init(init).clone()
}

/// Reads the duration of a video file.
///
/// The video stream's duration is preferred; the container duration is the
/// fallback. Returns `Ok(None)` when neither is recorded (live captures,
/// some WebM files).
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or has no video stream.
pub fn probe_duration<P: AsRef<Path>>(path: P) -> Result<Option<Duration>> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| Error::Io(format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| Error::Io("No video stream found".to_string()))?;

    // Convert from time_base units to seconds
    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        return Ok(None);
    };

    Ok(Duration::try_from_secs_f64(duration_secs).ok())
}

/// Duration probe backed by `FFmpeg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProbe;

impl DurationProbe for FfmpegProbe {
    fn probe(&self, media: &MediaRef) -> ProbeResult {
        probe_duration(media.path()).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }

    #[test]
    fn failed_init_is_reported_on_every_call() {
        let cell = OnceLock::new();
        let mut attempts = 0;
        let failing = || -> Result<()> { Err(Error::Io("no codecs".into())) };

        let first = init_once(&cell, || {
            attempts += 1;
            failing()
        });
        let second = init_once(&cell, || {
            attempts += 1;
            failing()
        });

        assert_eq!(attempts, 1);
        assert_eq!(first, Err(Error::Io("no codecs".into())));
        assert_eq!(second, first);
    }

    #[test]
    fn missing_file_is_reported() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = probe_duration(temp_dir.path().join("absent.mp4"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn non_video_file_is_reported_through_probe() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("fake.mp4");
        std::fs::write(&path, b"not a video").expect("failed to write file");

        let result = FfmpegProbe.probe(&MediaRef::new(path));
        assert!(result.is_err());
    }
}
