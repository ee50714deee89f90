//! Playback driver: advances the playhead against a monotonic clock.
//!
//! Every `play` hands out a `TickToken` stamped with the driver's current
//! generation. `pause`, `stop` and seeks bump the generation, so a tick
//! scheduled before the transition is recognised as stale and can never
//! move the playhead afterwards.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::time::MissedTickBehavior;

use crate::state::TimelineStore;

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Transport state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportState {
    #[default]
    Stopped,
    Paused,
    Playing,
}

/// Handle for one scheduled run of playback ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The token was cancelled; nothing changed.
    Stale,
    /// The playhead moved. `finished` is set when it reached the end and
    /// the driver paused itself.
    Advanced { playhead: f64, finished: bool },
}

#[derive(Debug, Clone, Copy)]
struct PlaybackAnchor {
    playhead: f64,
    started_at: Instant,
}

#[derive(Debug, Default)]
pub struct PlaybackDriver {
    state: TransportState,
    anchor: Option<PlaybackAnchor>,
    generation: u64,
}

impl PlaybackDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    /// Start playing from `playhead`. Already playing keeps the current run.
    pub fn play(&mut self, playhead: f64, now: Instant) -> TickToken {
        if self.is_playing() {
            return self.current_token();
        }
        self.start_run(playhead, now)
    }

    /// Stop advancing and keep the position. Only a running playback
    /// can pause; returns whether it did.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.cancel(TransportState::Paused);
        true
    }

    /// Stop advancing. Resetting the playhead is up to the caller.
    pub fn stop(&mut self) {
        self.cancel(TransportState::Stopped);
    }

    /// Re-anchor a running playback at `playhead`, e.g. after a seek.
    /// Returns the token for the new run, or `None` when not playing.
    pub fn rebase(&mut self, playhead: f64, now: Instant) -> Option<TickToken> {
        if !self.is_playing() {
            return None;
        }
        Some(self.start_run(playhead, now))
    }

    /// Compute the playhead for `now`. Stale tokens are ignored.
    pub fn tick(&mut self, token: TickToken, now: Instant, duration: f64) -> TickOutcome {
        if token.generation != self.generation || !self.is_playing() {
            return TickOutcome::Stale;
        }
        let Some(anchor) = self.anchor else {
            return TickOutcome::Stale;
        };

        let duration = duration.max(0.0);
        let elapsed = now.saturating_duration_since(anchor.started_at).as_secs_f64();
        let next_time = anchor.playhead + elapsed;
        if next_time >= duration {
            self.pause();
            return TickOutcome::Advanced {
                playhead: duration,
                finished: true,
            };
        }

        TickOutcome::Advanced {
            playhead: next_time,
            finished: false,
        }
    }

    /// Token of the current run, if playing.
    pub fn token(&self) -> Option<TickToken> {
        self.is_playing().then(|| self.current_token())
    }

    fn current_token(&self) -> TickToken {
        TickToken {
            generation: self.generation,
        }
    }

    fn start_run(&mut self, playhead: f64, now: Instant) -> TickToken {
        self.generation += 1;
        self.anchor = Some(PlaybackAnchor {
            playhead,
            started_at: now,
        });
        self.state = TransportState::Playing;
        self.current_token()
    }

    fn cancel(&mut self, state: TransportState) {
        self.generation += 1;
        self.anchor = None;
        self.state = state;
    }
}

/// Tick `store` every `interval` while it is playing. Returns the last
/// outcome: the finishing tick, or `Stale` once playback was paused or
/// stopped.
///
/// A seek re-anchors playback under a new token. When `token` goes stale
/// while the store is still playing, the loop picks up the live token
/// and keeps going from the seek target.
///
/// The store is borrowed only for the duration of each tick, so other
/// tasks on the same thread can pause, stop or seek in between.
pub async fn drive<C: Clock>(
    store: &RefCell<TimelineStore<C>>,
    token: TickToken,
    interval: Duration,
) -> TickOutcome {
    let mut token = token;
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let mut store = store.borrow_mut();
        match store.tick(token) {
            TickOutcome::Stale => match store.playback_token() {
                Some(live) if live != token => {
                    debug!("playback re-anchored, following new run");
                    token = live;
                }
                _ => return TickOutcome::Stale,
            },
            outcome @ TickOutcome::Advanced { finished: true, .. } => return outcome,
            TickOutcome::Advanced { .. } => {}
        }
    }
}
