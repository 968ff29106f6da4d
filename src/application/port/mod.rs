// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`backend`]: media playback (player handles, play/pause/seek, notifications)
//! - [`lister`]: enumeration of the video folder
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Backend calls are fire-and-forget; outcomes arrive later as
//!   [`BackendEvent`]s drained on the UI loop
//! - No `async fn`: the Iced runtime drives polling through its tick

pub mod backend;
pub mod lister;

pub use backend::{BackendEvent, MediaBackend, PlayerHandle};
pub use lister::DirectoryLister;
