// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`directory`]: recursive folder listing (implements [`DirectoryLister`])
//! - [`clock_backend`]: clock-driven players (implements [`MediaBackend`])
//! - [`ffmpeg`]: duration probing via `FFmpeg` (implements [`DurationProbe`])
//!
//! [`DirectoryLister`]: crate::application::port::DirectoryLister
//! [`MediaBackend`]: crate::application::port::MediaBackend

pub mod clock_backend;
pub mod directory;
pub mod ffmpeg;

pub use clock_backend::{ClockBackend, DurationProbe, ProbeResult};
pub use directory::FsDirectoryLister;
pub use ffmpeg::FfmpegProbe;
