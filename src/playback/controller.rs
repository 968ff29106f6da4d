// SPDX-License-Identifier: MPL-2.0
//! The playlist state machine.
//!
//! [`PlaylistController`] owns the playlist, one [`PlaybackSession`] per
//! visited entry and the scrub binding. Every change of "what plays now" goes
//! through it, and each transition completes inside a single call so the event
//! loop never observes a half-switched state.
//!
//! The active session is held apart from the inactive ones. The active slot
//! can therefore never be empty, and a backend notification is matched to the
//! active session by comparing player handles: anything else is stale.

use super::playlist::Playlist;
use super::scrub::ScrubBinding;
use super::session::PlaybackSession;
use crate::application::port::{BackendEvent, MediaBackend, PlayerHandle};
use crate::error::{Error, NavigationBoundary, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct PlaylistController<B: MediaBackend> {
    backend: B,
    playlist: Playlist,
    /// Inactive sessions by playlist index. The active index is always `None`.
    sessions: Vec<Option<PlaybackSession>>,
    active: PlaybackSession,
    current_index: usize,
    scrub: ScrubBinding,
    /// Set when a navigation asked a not-yet-ready session to play.
    resume_on_ready: bool,
}

impl<B: MediaBackend> PlaylistController<B> {
    /// Creates the controller at index 0 and binds the first session.
    ///
    /// Nothing plays until [`toggle_play_pause`](Self::toggle_play_pause) or
    /// [`play_when_ready`](Self::play_when_ready) is called.
    pub fn new(mut backend: B, playlist: Playlist) -> Self {
        let active = PlaybackSession::create(&mut backend, 0, playlist[0].clone());
        backend.bind_output(active.handle());

        let mut sessions = Vec::with_capacity(playlist.len());
        sessions.resize_with(playlist.len(), || None);

        let mut scrub = ScrubBinding::new();
        scrub.rebind(active.duration(), active.position());

        info!(entries = playlist.len(), "playlist loaded");
        Self {
            backend,
            playlist,
            sessions,
            active,
            current_index: 0,
            scrub,
            resume_on_ready: false,
        }
    }

    /// Creates a session for every entry up front.
    pub fn preload_all(&mut self) {
        for index in 0..self.playlist.len() {
            if index != self.current_index && self.sessions[index].is_none() {
                self.sessions[index] = Some(PlaybackSession::create(
                    &mut self.backend,
                    index,
                    self.playlist[index].clone(),
                ));
            }
        }
    }

    /// Moves to the next entry.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationBoundary::NoMoreVideosForward`] on the last entry.
    /// The state is unchanged in that case.
    pub fn advance(&mut self) -> Result<()> {
        if self.current_index >= self.playlist.last_index() {
            return Err(NavigationBoundary::NoMoreVideosForward.into());
        }
        self.switch_to(self.current_index + 1);
        Ok(())
    }

    /// Moves to the previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationBoundary::NoMorePreviousVideos`] on the first
    /// entry. The state is unchanged in that case.
    pub fn retreat(&mut self) -> Result<()> {
        if self.current_index == 0 {
            return Err(NavigationBoundary::NoMorePreviousVideos.into());
        }
        self.switch_to(self.current_index - 1);
        Ok(())
    }

    /// Pause the old session, bind the new one, play it.
    fn switch_to(&mut self, target: usize) {
        if let Err(err) = self.active.pause(&mut self.backend) {
            debug!(error = %err, "outgoing session was not ready");
        }

        let incoming = match self.sessions[target].take() {
            Some(session) => session,
            None => PlaybackSession::create(&mut self.backend, target, self.playlist[target].clone()),
        };
        let outgoing = std::mem::replace(&mut self.active, incoming);
        let outgoing_index = outgoing.index();
        self.sessions[outgoing_index] = Some(outgoing);
        self.current_index = target;

        self.backend.bind_output(self.active.handle());
        self.scrub.rebind(self.active.duration(), self.active.position());
        self.resume_on_ready = false;

        match self.active.play(&mut self.backend) {
            Ok(()) => {}
            Err(Error::BackendNotReady { .. }) => self.resume_on_ready = true,
            Err(err) => warn!(error = %err, "failed to start playback"),
        }
        info!(
            from = outgoing_index,
            to = target,
            media = %self.active.media(),
            "switched video"
        );
    }

    /// Pauses the active session if it is playing, plays it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendNotReady`] before the active session is ready.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.active.status().is_playing() {
            self.active.pause(&mut self.backend)
        } else {
            self.active.play(&mut self.backend)
        }
    }

    /// Plays the active session now, or as soon as it becomes ready.
    pub fn play_when_ready(&mut self) {
        if self.active.status().is_ready() {
            if let Err(err) = self.active.play(&mut self.backend) {
                warn!(error = %err, "failed to start playback");
            }
        } else {
            self.resume_on_ready = true;
        }
    }

    /// Applies one backend notification.
    ///
    /// Notifications for inactive sessions only update their readiness and
    /// retained position; they never touch the scrub binding, and their
    /// end-of-media notifications are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] when the active session failed.
    pub fn handle_backend_event(&mut self, event: BackendEvent) -> Result<()> {
        let handle = event.handle();
        if handle != self.active.handle() {
            self.handle_stale_event(event);
            return Ok(());
        }

        match event {
            BackendEvent::Ready { duration, .. } => {
                let duration = duration.or_else(|| self.backend.duration(handle));
                self.active.mark_ready(duration);
                self.scrub.rebind(self.active.duration(), self.active.position());
                debug!(%handle, ?duration, "active session ready");
                if std::mem::take(&mut self.resume_on_ready) {
                    self.active.play(&mut self.backend)?;
                }
            }
            BackendEvent::PositionChanged { position, .. } => {
                self.active.record_position(position);
                self.scrub.sync_position(self.active.position());
            }
            BackendEvent::EndOfMedia { .. } => self.replay_active()?,
            BackendEvent::Failed { reason, .. } => {
                warn!(%handle, %reason, "active session failed");
                return Err(Error::Backend(reason));
            }
        }
        Ok(())
    }

    fn handle_stale_event(&mut self, event: BackendEvent) {
        let handle = event.handle();
        let known_duration = self.backend.duration(handle);
        let Some(session) = self.inactive_session_mut(handle) else {
            debug!(%handle, "dropping event for unknown player");
            return;
        };
        match event {
            BackendEvent::Ready { duration, .. } => {
                session.mark_ready(duration.or(known_duration));
            }
            BackendEvent::Failed { reason, .. } => {
                warn!(%handle, %reason, "inactive session failed");
            }
            // Last position credited before the pause; the scrub stays put.
            BackendEvent::PositionChanged { position, .. } => {
                session.record_position(position);
            }
            BackendEvent::EndOfMedia { .. } => {
                debug!(%handle, "ignoring end of media from inactive session");
            }
        }
    }

    fn inactive_session_mut(&mut self, handle: PlayerHandle) -> Option<&mut PlaybackSession> {
        self.sessions
            .iter_mut()
            .flatten()
            .find(|session| session.handle() == handle)
    }

    /// Same-item looping: back to the start and keep playing.
    fn replay_active(&mut self) -> Result<()> {
        self.active.mark_ended();
        let start = self.active.seek(&mut self.backend, Duration::ZERO)?;
        self.active.play(&mut self.backend)?;
        self.scrub.sync_position(start);
        debug!(index = self.current_index, "replaying from the start");
        Ok(())
    }

    /// Drains and applies every pending backend notification in arrival
    /// order. Errors are collected so one failure does not drop later events.
    pub fn pump(&mut self) -> Vec<Error> {
        let mut errors = Vec::new();
        for event in self.backend.poll_events() {
            if let Err(err) = self.handle_backend_event(event) {
                errors.push(err);
            }
        }
        errors
    }

    /// Records an intermediate slider value while the user drags.
    pub fn scrub_preview(&mut self, secs: f64) {
        self.scrub.preview(secs);
    }

    /// Seeks the active session to the committed slider value.
    ///
    /// Returns the effective (clamped) target, or `None` when nothing was
    /// dragged since the last commit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendNotReady`] before the active session is ready.
    pub fn scrub_commit(&mut self) -> Result<Option<Duration>> {
        let Some(target) = self.scrub.commit() else {
            return Ok(None);
        };
        let effective = self.active.seek(&mut self.backend, target)?;
        self.scrub.sync_position(effective);
        debug!(?target, ?effective, "scrub committed");
        Ok(Some(effective))
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn active_session(&self) -> &PlaybackSession {
        &self.active
    }

    /// Returns the session at `index` if it was created.
    #[must_use]
    pub fn session(&self, index: usize) -> Option<&PlaybackSession> {
        if index == self.current_index {
            Some(&self.active)
        } else {
            self.sessions.get(index).and_then(Option::as_ref)
        }
    }

    /// Iterates over every created session, active one included.
    pub fn sessions(&self) -> impl Iterator<Item = &PlaybackSession> {
        self.sessions
            .iter()
            .flatten()
            .chain(std::iter::once(&self.active))
    }

    #[must_use]
    pub fn scrub(&self) -> &ScrubBinding {
        &self.scrub
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn is_resume_pending(&self) -> bool {
        self.resume_on_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaRef;
    use crate::domain::video::SessionStatus;
    use crate::test_utils::{assert_abs_diff_eq, BackendCall, RecordingBackend};

    const CLIP: Duration = Duration::from_secs(60);

    fn playlist(len: usize) -> Playlist {
        Playlist::build((0..len).map(|i| MediaRef::new(format!("v{i}.mp4"))).collect()).unwrap()
    }

    /// Controller over an auto-ready backend, first video already playing.
    fn playing_controller(len: usize) -> PlaylistController<RecordingBackend> {
        let mut controller = PlaylistController::new(RecordingBackend::auto_ready(CLIP), playlist(len));
        controller.play_when_ready();
        assert!(controller.pump().is_empty());
        controller
    }

    fn playing_count(controller: &PlaylistController<RecordingBackend>) -> usize {
        controller
            .sessions()
            .filter(|session| session.status().is_playing())
            .count()
    }

    fn handle_of(controller: &PlaylistController<RecordingBackend>, index: usize) -> PlayerHandle {
        controller.session(index).unwrap().handle()
    }

    #[test]
    fn new_binds_first_session_without_playing() {
        let controller = PlaylistController::new(RecordingBackend::new(), playlist(3));

        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.active_session().status(), SessionStatus::Uninitialized);
        assert_eq!(controller.backend().bound, Some(handle_of(&controller, 0)));
        assert!(controller.session(1).is_none());
        assert_eq!(controller.backend().plays(), 0);
    }

    #[test]
    fn preload_all_creates_every_session_once() {
        let mut controller = PlaylistController::new(RecordingBackend::new(), playlist(3));
        controller.preload_all();
        controller.preload_all();

        let creates = controller
            .backend()
            .calls
            .iter()
            .filter(|call| matches!(call, BackendCall::Create(..)))
            .count();
        assert_eq!(creates, 3);
        assert!((0..3).all(|i| controller.session(i).is_some()));
    }

    #[test]
    fn advance_twice_leaves_only_last_playing() {
        let mut controller = playing_controller(3);

        controller.advance().unwrap();
        controller.pump();
        controller.advance().unwrap();
        controller.pump();

        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.session(0).unwrap().status(), SessionStatus::Paused);
        assert_eq!(controller.session(1).unwrap().status(), SessionStatus::Paused);
        assert_eq!(controller.session(2).unwrap().status(), SessionStatus::Playing);
    }

    #[test]
    fn advance_pauses_old_before_playing_new() {
        let mut controller = playing_controller(2);
        controller.advance().unwrap();
        controller.pump();
        controller.retreat().unwrap();

        let old = handle_of(&controller, 1);
        let new = handle_of(&controller, 0);
        let tail: Vec<_> = controller.backend().calls.iter().rev().take(3).rev().cloned().collect();
        assert_eq!(
            tail,
            vec![BackendCall::Pause(old), BackendCall::Bind(new), BackendCall::Play(new)]
        );
    }

    #[test]
    fn advance_at_last_entry_reports_boundary_and_keeps_state() {
        let mut controller = playing_controller(1);
        let calls_before = controller.backend().calls.len();

        assert_eq!(
            controller.advance(),
            Err(Error::NavigationBoundary(NavigationBoundary::NoMoreVideosForward))
        );
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.active_session().status(), SessionStatus::Playing);
        assert_eq!(controller.backend().calls.len(), calls_before);
    }

    #[test]
    fn retreat_at_first_entry_reports_boundary() {
        let mut controller = playing_controller(3);

        assert_eq!(
            controller.retreat(),
            Err(Error::NavigationBoundary(NavigationBoundary::NoMorePreviousVideos))
        );
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.active_session().status(), SessionStatus::Playing);
    }

    #[test]
    fn index_stays_in_range_and_one_session_plays() {
        let mut controller = playing_controller(4);
        let moves = [1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 2, 1, 2, 0, 2];

        for step in moves {
            let _ = match step {
                0 => controller.retreat(),
                1 => controller.advance(),
                _ => controller.toggle_play_pause(),
            };
            assert!(playing_count(&controller) <= 1);
            controller.pump();
            assert!(controller.current_index() < 4);
            assert!(playing_count(&controller) <= 1);
            assert_eq!(controller.backend().bound, Some(controller.active_session().handle()));
        }
    }

    #[test]
    fn position_survives_round_trip() {
        let mut controller = playing_controller(3);
        controller.advance().unwrap();
        controller.pump();

        let handle = handle_of(&controller, 1);
        controller
            .handle_backend_event(BackendEvent::PositionChanged {
                handle,
                position: Duration::from_secs(42),
            })
            .unwrap();

        controller.advance().unwrap();
        controller.pump();
        controller.retreat().unwrap();

        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.active_session().position(), Duration::from_secs(42));
        assert_abs_diff_eq!(controller.scrub().value_secs(), 42.0);
    }

    #[test]
    fn end_of_media_on_active_session_replays_from_start() {
        let mut controller = playing_controller(2);
        let handle = controller.active_session().handle();
        controller
            .handle_backend_event(BackendEvent::PositionChanged {
                handle,
                position: CLIP,
            })
            .unwrap();

        controller
            .handle_backend_event(BackendEvent::EndOfMedia { handle })
            .unwrap();

        assert_eq!(controller.active_session().position(), Duration::ZERO);
        assert_eq!(controller.active_session().status(), SessionStatus::Playing);
        assert!(controller
            .backend()
            .calls
            .contains(&BackendCall::Seek(handle, Duration::ZERO)));
    }

    #[test]
    fn stale_end_of_media_is_ignored() {
        let mut controller = playing_controller(2);
        let stale = controller.active_session().handle();
        controller.advance().unwrap();
        controller.pump();
        let calls_before = controller.backend().calls.len();

        controller
            .handle_backend_event(BackendEvent::EndOfMedia { handle: stale })
            .unwrap();

        assert_eq!(controller.session(0).unwrap().status(), SessionStatus::Paused);
        assert_eq!(controller.backend().calls.len(), calls_before);
    }

    #[test]
    fn stale_position_is_retained_without_moving_scrub() {
        let mut controller = playing_controller(2);
        let stale = controller.active_session().handle();
        controller.advance().unwrap();
        controller.pump();

        controller
            .handle_backend_event(BackendEvent::PositionChanged {
                handle: stale,
                position: Duration::from_secs(7),
            })
            .unwrap();

        assert_eq!(controller.session(0).unwrap().position(), Duration::from_secs(7));
        assert_eq!(controller.session(0).unwrap().status(), SessionStatus::Paused);
        assert_abs_diff_eq!(controller.scrub().value_secs(), 0.0);
    }

    #[test]
    fn scrub_commit_clamps_to_duration() {
        let mut controller = playing_controller(1);

        controller.scrub_preview(100.0);
        let target = controller.scrub_commit().unwrap();

        assert_eq!(target, Some(CLIP));
        assert_eq!(controller.active_session().position(), CLIP);
    }

    #[test]
    fn scrub_commit_without_drag_is_noop() {
        let mut controller = playing_controller(1);
        let calls_before = controller.backend().calls.len();

        assert_eq!(controller.scrub_commit(), Ok(None));
        assert_eq!(controller.backend().calls.len(), calls_before);
    }

    #[test]
    fn position_updates_never_seek() {
        let mut controller = playing_controller(1);
        let handle = controller.active_session().handle();

        for secs in 1..10 {
            controller
                .handle_backend_event(BackendEvent::PositionChanged {
                    handle,
                    position: Duration::from_secs(secs),
                })
                .unwrap();
        }

        assert!(!controller
            .backend()
            .calls
            .iter()
            .any(|call| matches!(call, BackendCall::Seek(..))));
        assert_eq!(controller.scrub_commit(), Ok(None));
    }

    #[test]
    fn toggle_before_ready_is_rejected() {
        let mut controller = PlaylistController::new(RecordingBackend::new(), playlist(1));

        assert_eq!(
            controller.toggle_play_pause(),
            Err(Error::BackendNotReady { index: 0 })
        );
        assert_eq!(controller.active_session().status(), SessionStatus::Uninitialized);
    }

    #[test]
    fn navigation_to_unready_session_plays_once_ready() {
        let mut controller = PlaylistController::new(RecordingBackend::new(), playlist(2));
        let first = controller.active_session().handle();
        controller.backend_mut().push(BackendEvent::Ready {
            handle: first,
            duration: Some(CLIP),
        });
        controller.pump();

        controller.advance().unwrap();
        assert!(controller.is_resume_pending());
        assert_eq!(controller.active_session().status(), SessionStatus::Uninitialized);

        let second = controller.active_session().handle();
        controller.backend_mut().push(BackendEvent::Ready {
            handle: second,
            duration: Some(CLIP),
        });
        controller.pump();

        assert!(!controller.is_resume_pending());
        assert_eq!(controller.active_session().status(), SessionStatus::Playing);
        assert_abs_diff_eq!(controller.scrub().max_secs(), 60.0);
    }

    #[test]
    fn ready_without_duration_falls_back_to_backend_query() {
        let mut controller = PlaylistController::new(RecordingBackend::new(), playlist(1));
        let handle = controller.active_session().handle();
        controller.backend_mut().set_duration(handle, CLIP);
        controller.backend_mut().push(BackendEvent::Ready {
            handle,
            duration: None,
        });
        controller.pump();

        assert_eq!(controller.active_session().duration(), Some(CLIP));
        assert_abs_diff_eq!(controller.scrub().max_secs(), 60.0);
    }

    #[test]
    fn later_ready_without_duration_keeps_known_one() {
        let mut controller = PlaylistController::new(RecordingBackend::new(), playlist(1));
        let handle = controller.active_session().handle();
        controller.backend_mut().push(BackendEvent::Ready {
            handle,
            duration: Some(CLIP),
        });
        controller.pump();
        controller
            .handle_backend_event(BackendEvent::Ready {
                handle,
                duration: None,
            })
            .unwrap();

        assert_eq!(controller.active_session().duration(), Some(CLIP));
    }

    #[test]
    fn failure_of_active_session_is_reported() {
        let mut controller = playing_controller(2);
        let handle = controller.active_session().handle();
        controller.backend_mut().push(BackendEvent::Failed {
            handle,
            reason: "corrupt file".into(),
        });

        let errors = controller.pump();
        assert_eq!(errors, vec![Error::Backend("corrupt file".into())]);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn failure_of_inactive_session_is_only_logged() {
        let mut controller = playing_controller(2);
        let stale = controller.active_session().handle();
        controller.advance().unwrap();
        controller.pump();

        let result = controller.handle_backend_event(BackendEvent::Failed {
            handle: stale,
            reason: "gone".into(),
        });
        assert_eq!(result, Ok(()));
    }
}
