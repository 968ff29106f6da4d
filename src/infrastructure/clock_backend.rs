// SPDX-License-Identifier: MPL-2.0
//! Clock-driven adapter implementing the [`MediaBackend`] port.
//!
//! [`ClockBackend`] keeps one virtual player per handle. A player becomes
//! ready once its duration is probed, then its position follows the clock
//! while it plays. No frame is decoded: the application's video pane renders
//! the bound item.
//!
//! # Threading
//!
//! Probing opens the file, so by default it runs as a blocking task on the
//! Tokio runtime (or a plain thread when no runtime is entered). Results come
//! back over an unbounded `mpsc` channel and are turned into
//! [`BackendEvent::Ready`] or [`BackendEvent::Failed`] on the next
//! [`poll_events`](MediaBackend::poll_events), on the caller's thread.

use crate::application::port::{BackendEvent, MediaBackend, PlayerHandle};
use crate::domain::media::MediaRef;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Probe outcome: the duration (`None` when unknown) or a failure reason.
pub type ProbeResult = std::result::Result<Option<Duration>, String>;

/// Reads a media item's duration. Called off the UI thread.
pub trait DurationProbe: Send + Sync + 'static {
    fn probe(&self, media: &MediaRef) -> ProbeResult;
}

impl<F> DurationProbe for F
where
    F: Fn(&MediaRef) -> ProbeResult + Send + Sync + 'static,
{
    fn probe(&self, media: &MediaRef) -> ProbeResult {
        self(media)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerState {
    Probing,
    Stopped,
    Playing,
    Ended,
    Failed,
}

#[derive(Debug)]
struct VirtualPlayer {
    media: MediaRef,
    state: PlayerState,
    position: Duration,
    duration: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
enum Clock {
    System,
    Manual(Instant),
}

/// Media backend whose players advance with a clock.
pub struct ClockBackend {
    probe: Arc<dyn DurationProbe>,
    threaded: bool,
    probe_tx: UnboundedSender<(PlayerHandle, ProbeResult)>,
    probe_rx: UnboundedReceiver<(PlayerHandle, ProbeResult)>,
    players: HashMap<PlayerHandle, VirtualPlayer>,
    next_handle: u64,
    bound: Option<PlayerHandle>,
    pending: VecDeque<BackendEvent>,
    clock: Clock,
    last_tick: Instant,
}

impl ClockBackend {
    /// Creates a backend that probes each new player on a worker thread.
    pub fn new(probe: impl DurationProbe) -> Self {
        Self::build(Arc::new(probe), true)
    }

    /// Creates a backend that probes synchronously inside `create_player`.
    /// The result is still only reported by the next poll.
    pub fn with_inline_probe(probe: impl DurationProbe) -> Self {
        Self::build(Arc::new(probe), false)
    }

    fn build(probe: Arc<dyn DurationProbe>, threaded: bool) -> Self {
        let (probe_tx, probe_rx) = mpsc::unbounded_channel();
        Self {
            probe,
            threaded,
            probe_tx,
            probe_rx,
            players: HashMap::new(),
            next_handle: 0,
            bound: None,
            pending: VecDeque::new(),
            clock: Clock::System,
            last_tick: Instant::now(),
        }
    }

    /// Switches to a clock that only moves through [`advance_clock`](Self::advance_clock).
    #[must_use]
    pub fn with_manual_clock(mut self) -> Self {
        let now = Instant::now();
        self.clock = Clock::Manual(now);
        self.last_tick = now;
        self
    }

    /// Moves a manual clock forward. No effect on the system clock.
    pub fn advance_clock(&mut self, by: Duration) {
        if let Clock::Manual(now) = &mut self.clock {
            *now += by;
        }
    }

    #[must_use]
    pub fn bound(&self) -> Option<PlayerHandle> {
        self.bound
    }

    #[must_use]
    pub fn position(&self, handle: PlayerHandle) -> Option<Duration> {
        self.players.get(&handle).map(|player| player.position)
    }

    #[must_use]
    pub fn is_playing(&self, handle: PlayerHandle) -> bool {
        self.players
            .get(&handle)
            .is_some_and(|player| player.state == PlayerState::Playing)
    }

    fn now(&self) -> Instant {
        match self.clock {
            Clock::System => Instant::now(),
            Clock::Manual(now) => now,
        }
    }

    fn spawn_probe(&self, handle: PlayerHandle, media: MediaRef) {
        let probe = Arc::clone(&self.probe);
        let tx = self.probe_tx.clone();
        if !self.threaded {
            // The receiver lives in self, so this send cannot fail.
            let _ = tx.send((handle, probe.probe(&media)));
            return;
        }

        let fallback_media = media.clone();
        let job = move || {
            let result = probe.probe(&media);
            // The backend may have been dropped while probing.
            let _ = tx.send((handle, result));
        };

        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            runtime.spawn_blocking(job);
            return;
        }

        let spawned = thread::Builder::new()
            .name("duration-probe".into())
            .spawn(job);
        if let Err(err) = spawned {
            warn!(error = %err, "cannot spawn probe thread, probing inline");
            let _ = self
                .probe_tx
                .send((handle, self.probe.probe(&fallback_media)));
        }
    }

    fn collect_probe_results(&mut self) {
        while let Ok((handle, result)) = self.probe_rx.try_recv() {
            let Some(player) = self.players.get_mut(&handle) else {
                continue;
            };
            match result {
                Ok(duration) => {
                    player.duration = duration;
                    player.state = PlayerState::Stopped;
                    debug!(%handle, ?duration, media = %player.media, "player ready");
                    self.pending.push_back(BackendEvent::Ready { handle, duration });
                }
                Err(reason) => {
                    player.state = PlayerState::Failed;
                    warn!(%handle, media = %player.media, %reason, "probe failed");
                    self.pending.push_back(BackendEvent::Failed { handle, reason });
                }
            }
        }
    }

    /// Credits every running player with the time since the last settle and
    /// queues the resulting notifications. Runs before any state change so
    /// time is charged to the state it was spent in.
    fn settle(&mut self) {
        let now = self.now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if elapsed.is_zero() {
            return;
        }

        let mut playing: Vec<_> = self
            .players
            .iter_mut()
            .filter(|(_, player)| player.state == PlayerState::Playing)
            .collect();
        // HashMap order is random; keep event order stable.
        playing.sort_by_key(|(handle, _)| **handle);

        for (&handle, player) in playing {
            player.position = player.position.saturating_add(elapsed);
            let ended = match player.duration {
                Some(duration) if player.position >= duration => {
                    player.position = duration;
                    player.state = PlayerState::Ended;
                    true
                }
                _ => false,
            };
            self.pending.push_back(BackendEvent::PositionChanged {
                handle,
                position: player.position,
            });
            if ended {
                self.pending.push_back(BackendEvent::EndOfMedia { handle });
            }
        }
    }
}

impl MediaBackend for ClockBackend {
    fn create_player(&mut self, media: &MediaRef) -> PlayerHandle {
        let handle = PlayerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.players.insert(
            handle,
            VirtualPlayer {
                media: media.clone(),
                state: PlayerState::Probing,
                position: Duration::ZERO,
                duration: None,
            },
        );
        self.spawn_probe(handle, media.clone());
        handle
    }

    fn play(&mut self, handle: PlayerHandle) {
        self.settle();
        match self.players.get_mut(&handle) {
            Some(player) if matches!(player.state, PlayerState::Stopped | PlayerState::Ended) => {
                player.state = PlayerState::Playing;
            }
            Some(player) => debug!(%handle, state = ?player.state, "play ignored"),
            None => debug!(%handle, "play for unknown player"),
        }
    }

    fn pause(&mut self, handle: PlayerHandle) {
        self.settle();
        if let Some(player) = self.players.get_mut(&handle) {
            if player.state == PlayerState::Playing {
                player.state = PlayerState::Stopped;
            }
        }
    }

    fn seek(&mut self, handle: PlayerHandle, position: Duration) {
        self.settle();
        let Some(player) = self.players.get_mut(&handle) else {
            return;
        };
        if matches!(player.state, PlayerState::Probing | PlayerState::Failed) {
            debug!(%handle, "seek ignored before ready");
            return;
        }
        player.position = match player.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        if player.state == PlayerState::Ended && Some(player.position) != player.duration {
            player.state = PlayerState::Stopped;
        }
        self.pending.push_back(BackendEvent::PositionChanged {
            handle,
            position: player.position,
        });
    }

    fn duration(&self, handle: PlayerHandle) -> Option<Duration> {
        self.players.get(&handle).and_then(|player| player.duration)
    }

    fn bind_output(&mut self, handle: PlayerHandle) {
        self.bound = Some(handle);
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        self.collect_probe_results();
        self.settle();
        self.pending.drain(..).collect()
    }
}
