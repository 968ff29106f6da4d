// SPDX-License-Identifier: MPL-2.0
//! Playback core: playlist, per-item sessions, the controller that switches
//! between them, and the slider binding.
//!
//! Everything here runs on the UI event loop. Backend notifications are fed
//! in through [`PlaylistController::pump`].

pub mod controller;
pub mod overlay;
pub mod playlist;
pub mod scrub;
pub mod session;

pub use controller::PlaylistController;
pub use overlay::OverlayVisibility;
pub use playlist::Playlist;
pub use scrub::ScrubBinding;
pub use session::PlaybackSession;
