// SPDX-License-Identifier: MPL-2.0
//! Media backend port definition.
//!
//! This module defines the [`MediaBackend`] trait the playback core drives.
//! The backend owns decoding and rendering; the core only asks for players,
//! sends requests, and reacts to the notifications the backend queues.
//!
//! # Design Notes
//!
//! - Every request is fire-and-forget: `play`, `pause`, `seek` and
//!   `create_player` return immediately and their effect is observed later
//! - Readiness, position updates and end-of-media are tagged
//!   [`BackendEvent`]s, drained in arrival order by [`MediaBackend::poll_events`]
//! - Events carry the [`PlayerHandle`] they belong to so the caller can drop
//!   notifications from players that are no longer active

use crate::domain::media::MediaRef;
use std::fmt;
use std::time::Duration;

// =============================================================================
// PlayerHandle
// =============================================================================

/// Identity of one backend player. Handles are never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerHandle(u64);

impl PlayerHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

// =============================================================================
// BackendEvent
// =============================================================================

/// Notification queued by a backend for one of its players.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// The player can start; `duration` is `None` for streams of unknown length.
    Ready {
        handle: PlayerHandle,
        duration: Option<Duration>,
    },
    /// The playback position moved (periodic update or after a seek).
    PositionChanged {
        handle: PlayerHandle,
        position: Duration,
    },
    /// Playback reached the end of the media. Fired once per run-through.
    EndOfMedia { handle: PlayerHandle },
    /// The player cannot continue (unreadable file, unsupported format...).
    Failed { handle: PlayerHandle, reason: String },
}

impl BackendEvent {
    /// Returns the player this event belongs to.
    #[must_use]
    pub fn handle(&self) -> PlayerHandle {
        match self {
            BackendEvent::Ready { handle, .. }
            | BackendEvent::PositionChanged { handle, .. }
            | BackendEvent::EndOfMedia { handle }
            | BackendEvent::Failed { handle, .. } => *handle,
        }
    }
}

// =============================================================================
// MediaBackend Trait
// =============================================================================

/// Port for media playback.
///
/// # Lifecycle
///
/// 1. `create_player()` allocates a player and returns its handle at once
/// 2. A [`BackendEvent::Ready`] arrives later with the duration
/// 3. `play()`/`pause()`/`seek()` steer the player
/// 4. [`BackendEvent::PositionChanged`] and [`BackendEvent::EndOfMedia`]
///    report progress
///
/// `bind_output()` selects which player the visible render surface shows.
/// Only one player is bound at a time.
pub trait MediaBackend {
    /// Allocates a player for `media`.
    fn create_player(&mut self, media: &MediaRef) -> PlayerHandle;

    /// Requests playback to start or resume.
    fn play(&mut self, handle: PlayerHandle);

    /// Requests playback to pause.
    fn pause(&mut self, handle: PlayerHandle);

    /// Requests a reposition. The caller has already clamped `position`.
    fn seek(&mut self, handle: PlayerHandle, position: Duration);

    /// Returns the media duration once known.
    fn duration(&self, handle: PlayerHandle) -> Option<Duration>;

    /// Binds the render surface to `handle`, unbinding whatever was shown.
    fn bind_output(&mut self, handle: PlayerHandle);

    /// Drains pending notifications, oldest first.
    fn poll_events(&mut self) -> Vec<BackendEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaBackend) {}

    #[test]
    fn event_handle_is_exposed_for_every_variant() {
        let handle = PlayerHandle::new(7);
        let events = [
            BackendEvent::Ready {
                handle,
                duration: Some(Duration::from_secs(3)),
            },
            BackendEvent::PositionChanged {
                handle,
                position: Duration::from_secs(1),
            },
            BackendEvent::EndOfMedia { handle },
            BackendEvent::Failed {
                handle,
                reason: "boom".into(),
            },
        ];
        for event in events {
            assert_eq!(event.handle(), handle);
        }
    }

    #[test]
    fn handle_display_and_raw() {
        let handle = PlayerHandle::new(3);
        assert_eq!(handle.raw(), 3);
        assert_eq!(handle.to_string(), "player#3");
    }
}
