// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Re-exports the `approx` assertion macro for float comparisons and
//! provides [`RecordingBackend`], a scripted [`MediaBackend`] that records
//! every request and only emits the notifications a test pushes.

pub use approx::assert_abs_diff_eq;

use crate::application::port::{BackendEvent, MediaBackend, PlayerHandle};
use crate::domain::media::MediaRef;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// A request the playback core sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Create(MediaRef, PlayerHandle),
    Play(PlayerHandle),
    Pause(PlayerHandle),
    Seek(PlayerHandle, Duration),
    Bind(PlayerHandle),
}

/// Backend double. Handles are numbered from 0 in creation order.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_handle: u64,
    pub calls: Vec<BackendCall>,
    pub bound: Option<PlayerHandle>,
    durations: HashMap<PlayerHandle, Duration>,
    pending: VecDeque<BackendEvent>,
    auto_ready: Option<Duration>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a `Ready` notification with `duration` for every new player.
    pub fn auto_ready(duration: Duration) -> Self {
        Self {
            auto_ready: Some(duration),
            ..Self::default()
        }
    }

    pub fn push(&mut self, event: BackendEvent) {
        if let BackendEvent::Ready {
            handle,
            duration: Some(duration),
        } = event
        {
            self.durations.insert(handle, duration);
        }
        self.pending.push_back(event);
    }

    pub fn set_duration(&mut self, handle: PlayerHandle, duration: Duration) {
        self.durations.insert(handle, duration);
    }

    pub fn plays(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, BackendCall::Play(_)))
            .count()
    }
}

impl MediaBackend for RecordingBackend {
    fn create_player(&mut self, media: &MediaRef) -> PlayerHandle {
        let handle = PlayerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.calls.push(BackendCall::Create(media.clone(), handle));
        if let Some(duration) = self.auto_ready {
            self.push(BackendEvent::Ready {
                handle,
                duration: Some(duration),
            });
        }
        handle
    }

    fn play(&mut self, handle: PlayerHandle) {
        self.calls.push(BackendCall::Play(handle));
    }

    fn pause(&mut self, handle: PlayerHandle) {
        self.calls.push(BackendCall::Pause(handle));
    }

    fn seek(&mut self, handle: PlayerHandle, position: Duration) {
        self.calls.push(BackendCall::Seek(handle, position));
    }

    fn duration(&self, handle: PlayerHandle) -> Option<Duration> {
        self.durations.get(&handle).copied()
    }

    fn bind_output(&mut self, handle: PlayerHandle) {
        self.bound = Some(handle);
        self.calls.push(BackendCall::Bind(handle));
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        self.pending.drain(..).collect()
    }
}
