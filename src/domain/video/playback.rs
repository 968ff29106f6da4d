// SPDX-License-Identifier: MPL-2.0
//! Playback session status.
//!
//! `Uninitialized -> Ready -> {Playing <-> Paused} -> Ended`. `Ended` is only
//! entered from `Playing` and the controller leaves it again right away by
//! replaying the item from the start.

/// Lifecycle status of one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The backend has not reported the media ready yet.
    #[default]
    Uninitialized,
    /// Ready to play, never started.
    Ready,
    /// Currently playing.
    Playing,
    /// Paused at the current position.
    Paused,
    /// Reached the end of the media.
    Ended,
}

impl SessionStatus {
    /// Returns true once the backend has reported readiness.
    #[must_use]
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }
}
