//! Single-writer owner of the editor snapshot and the playback driver.

use std::sync::Arc;

use log::{debug, info};

use crate::core::{Clock, PlaybackDriver, ScaleConvention, SystemClock, TickOutcome, TickToken};
use crate::hotkeys::HotkeyAction;
use crate::state::{apply, EditorState, Project, TimelineAction};

/// What a hotkey did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HotkeyOutcome {
    pub changed: bool,
    /// Set when the hotkey started playback; the scheduler drives it.
    pub token: Option<TickToken>,
}

impl HotkeyOutcome {
    fn changed(changed: bool) -> Self {
        Self { changed, token: None }
    }
}

/// Holds the current `EditorState` and applies edits to it one at a time.
///
/// `snapshot()` hands out shared, immutable snapshots; a retained snapshot
/// keeps showing the state it was taken from.
pub struct TimelineStore<C: Clock = SystemClock> {
    state: Arc<EditorState>,
    driver: PlaybackDriver,
    clock: C,
}

impl TimelineStore<SystemClock> {
    pub fn new(project: Project, scale: ScaleConvention) -> Self {
        Self::with_clock(project, scale, SystemClock)
    }
}

impl<C: Clock> TimelineStore<C> {
    pub fn with_clock(project: Project, scale: ScaleConvention, clock: C) -> Self {
        Self {
            state: Arc::new(EditorState::new(project, scale)),
            driver: PlaybackDriver::new(),
            clock,
        }
    }

    pub fn snapshot(&self) -> Arc<EditorState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply an edit. Returns whether the state changed.
    ///
    /// Moving the playhead while playing re-anchors playback at the new
    /// position; ticks scheduled before the seek become stale.
    pub fn dispatch(&mut self, action: TimelineAction) -> bool {
        let transition = apply(&self.state, &action);
        if !transition.changed {
            return false;
        }
        if matches!(action, TimelineAction::SetPlayhead(_)) {
            let now = self.clock.now();
            if self.driver.rebase(transition.state.playhead, now).is_some() {
                debug!("playback re-anchored at {:.3}s", transition.state.playhead);
            }
        }
        self.state = Arc::new(transition.state);
        true
    }

    /// Start playback from the current playhead.
    /// Returns the token the scheduler must pass back to `tick`.
    pub fn play(&mut self) -> TickToken {
        let was_playing = self.driver.is_playing();
        let token = self.driver.play(self.state.playhead, self.clock.now());
        if !was_playing {
            info!("playback started at {:.3}s", self.state.playhead);
            self.sync_transport();
        }
        token
    }

    /// Stop advancing and keep the position. Does nothing unless playing.
    pub fn pause(&mut self) {
        if !self.driver.pause() {
            return;
        }
        info!("playback paused at {:.3}s", self.state.playhead);
        self.sync_transport();
    }

    /// Stop advancing and rewind to zero.
    pub fn stop(&mut self) {
        self.driver.stop();
        info!("playback stopped");
        self.update(|state| state.playhead = 0.0);
        self.sync_transport();
    }

    /// Play when paused/stopped, pause when playing.
    /// Returns the new token when playback started.
    pub fn toggle_playback(&mut self) -> Option<TickToken> {
        if self.driver.is_playing() {
            self.pause();
            None
        } else {
            Some(self.play())
        }
    }

    /// Move the playhead. Returns the fresh token when playing.
    pub fn seek(&mut self, time: f64) -> Option<TickToken> {
        if !time.is_finite() {
            return None;
        }
        self.update(|state| state.playhead = time);
        self.driver.rebase(time, self.clock.now())
    }

    /// Token of the running playback, if any. A seek replaces it.
    pub fn playback_token(&self) -> Option<TickToken> {
        self.driver.token()
    }

    /// Advance the playhead for the run identified by `token`.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        let duration = self.state.duration();
        let outcome = self.driver.tick(token, self.clock.now(), duration);
        if let TickOutcome::Advanced { playhead, finished } = outcome {
            self.update(|state| state.playhead = playhead);
            if finished {
                info!("playback reached the end at {:.3}s", playhead);
                self.sync_transport();
            }
        }
        outcome
    }

    /// Run an editing or transport hotkey.
    /// `SaveProject` is left to the caller, which owns the project folder.
    pub fn run_hotkey(&mut self, action: HotkeyAction) -> HotkeyOutcome {
        match action {
            HotkeyAction::TimelineZoomIn => HotkeyOutcome::changed(self.dispatch(TimelineAction::ZoomIn)),
            HotkeyAction::TimelineZoomOut => HotkeyOutcome::changed(self.dispatch(TimelineAction::ZoomOut)),
            HotkeyAction::PlayPause => HotkeyOutcome {
                changed: true,
                token: self.toggle_playback(),
            },
            HotkeyAction::Stop => {
                let before = (self.state.playhead, self.state.transport);
                self.stop();
                HotkeyOutcome::changed(before != (self.state.playhead, self.state.transport))
            }
            HotkeyAction::SeekStart => {
                let before = self.state.playhead;
                self.seek(0.0);
                HotkeyOutcome::changed(before != 0.0)
            }
            HotkeyAction::SplitAtPlayhead => {
                let changed = match self.state.selection.primary_clip().cloned() {
                    Some(id) => {
                        let at = self.state.playhead;
                        self.dispatch(TimelineAction::SplitClip { id, at })
                    }
                    None => false,
                };
                HotkeyOutcome::changed(changed)
            }
            HotkeyAction::DeleteSelection => {
                let changed = match self.state.selection.primary_clip().cloned() {
                    Some(id) => self.dispatch(TimelineAction::RemoveClip(id)),
                    None => false,
                };
                HotkeyOutcome::changed(changed)
            }
            HotkeyAction::ClearSelection => {
                let clips = self.dispatch(TimelineAction::SelectClip(None));
                let tracks = self.dispatch(TimelineAction::SelectTrack(None));
                HotkeyOutcome::changed(clips || tracks)
            }
            HotkeyAction::SaveProject => HotkeyOutcome::default(),
        }
    }

    fn update(&mut self, edit: impl FnOnce(&mut EditorState)) {
        let mut next = (*self.state).clone();
        edit(&mut next);
        if next != *self.state {
            self.state = Arc::new(next);
        }
    }

    fn sync_transport(&mut self) {
        let transport = self.driver.state();
        self.update(|state| state.transport = transport);
    }
}
