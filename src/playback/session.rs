// SPDX-License-Identifier: MPL-2.0
//! One media item's playback lifecycle.
//!
//! A [`PlaybackSession`] wraps a backend player handle and mirrors the state
//! the backend reports for it. Requests are forwarded to the backend and the
//! local status is updated immediately, so two requests in the same loop
//! iteration see each other's effect.

use crate::application::port::{MediaBackend, PlayerHandle};
use crate::domain::media::MediaRef;
use crate::domain::video::SessionStatus;
use crate::error::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Playback state of one playlist entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    index: usize,
    media: MediaRef,
    handle: PlayerHandle,
    status: SessionStatus,
    position: Duration,
    duration: Option<Duration>,
}

impl PlaybackSession {
    /// Allocates a backend player for `media`. The session starts
    /// `Uninitialized` until the backend reports it ready.
    pub fn create<B: MediaBackend + ?Sized>(backend: &mut B, index: usize, media: MediaRef) -> Self {
        let handle = backend.create_player(&media);
        debug!(%handle, index, media = %media, "created playback session");
        Self {
            index,
            media,
            handle,
            status: SessionStatus::Uninitialized,
            position: Duration::ZERO,
            duration: None,
        }
    }

    /// Requests playback. No-op when already playing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendNotReady`] before the backend reported readiness.
    pub fn play<B: MediaBackend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        self.ensure_ready()?;
        if self.status.is_playing() {
            return Ok(());
        }
        backend.play(self.handle);
        self.status = SessionStatus::Playing;
        Ok(())
    }

    /// Requests a pause. No-op unless currently playing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendNotReady`] before the backend reported readiness.
    pub fn pause<B: MediaBackend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        self.ensure_ready()?;
        if !self.status.is_playing() {
            return Ok(());
        }
        backend.pause(self.handle);
        self.status = SessionStatus::Paused;
        Ok(())
    }

    /// Requests a reposition and returns the clamped target.
    ///
    /// The target is clamped to `[0, duration]` when the duration is known.
    /// The status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendNotReady`] before the backend reported readiness.
    pub fn seek<B: MediaBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        target: Duration,
    ) -> Result<Duration> {
        self.ensure_ready()?;
        let target = self.clamp(target);
        backend.seek(self.handle, target);
        self.position = target;
        Ok(target)
    }

    /// Records the backend's readiness notification.
    ///
    /// Returns true on the `Uninitialized -> Ready` transition. A known
    /// duration is kept when a later notification carries none.
    pub fn mark_ready(&mut self, duration: Option<Duration>) -> bool {
        if duration.is_some() {
            self.duration = duration;
        }
        if self.status.is_ready() {
            return false;
        }
        self.status = SessionStatus::Ready;
        true
    }

    /// Records a position pushed by the backend.
    pub fn record_position(&mut self, position: Duration) {
        self.position = self.clamp(position);
    }

    /// Records an end-of-media notification. Only a playing session ends.
    pub fn mark_ended(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        self.status = SessionStatus::Ended;
        if let Some(duration) = self.duration {
            self.position = duration;
        }
        true
    }

    fn clamp(&self, target: Duration) -> Duration {
        match self.duration {
            Some(duration) => target.min(duration),
            None => target,
        }
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.status.is_ready() {
            Ok(())
        } else {
            Err(Error::BackendNotReady { index: self.index })
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn media(&self) -> &MediaRef {
        &self.media
    }

    #[must_use]
    pub fn handle(&self) -> PlayerHandle {
        self.handle
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
