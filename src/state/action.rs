//! Timeline edits as named transitions over `EditorState`.
//!
//! `apply` never fails. A request that cannot be honoured (unknown id,
//! split point outside the clip, non-finite time) yields an unchanged
//! copy of the state with `changed == false`.

use log::debug;

use crate::state::{Clip, ClipId, EditorState, Track, TrackId};

/// A single edit requested by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineAction {
    AddTrack(Track),
    /// Removes the track and every clip on it.
    RemoveTrack(TrackId),
    MoveTrackUp(TrackId),
    MoveTrackDown(TrackId),
    AddClip(Clip),
    RemoveClip(ClipId),
    /// `None` clears the clip selection.
    SelectClip(Option<ClipId>),
    /// `None` clears the track selection.
    SelectTrack(Option<TrackId>),
    /// Sets `start` only; `end` is left in place.
    MoveClip { id: ClipId, start: f64 },
    ResizeClip { id: ClipId, start: f64, end: f64 },
    SplitClip { id: ClipId, at: f64 },
    SetClipLabel { id: ClipId, label: String },
    SetPlayhead(f64),
    SetZoom(f64),
    ZoomIn,
    ZoomOut,
}

/// Outcome of applying an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: EditorState,
    /// False when the action was a no-op.
    pub changed: bool,
}

impl Transition {
    fn unchanged(state: &EditorState) -> Self {
        Self {
            state: state.clone(),
            changed: false,
        }
    }

    fn from_edit(state: EditorState, changed: bool) -> Self {
        Self { state, changed }
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

/// Apply `action` to `state`, returning the next snapshot.
pub fn apply(state: &EditorState, action: &TimelineAction) -> Transition {
    let mut next = state.clone();

    let changed = match action {
        TimelineAction::AddTrack(track) => next.project.add_track(track.clone()),
        TimelineAction::RemoveTrack(id) => {
            let removed_clips: Vec<ClipId> = next
                .project
                .clips_on_track(id)
                .into_iter()
                .map(|clip| clip.id.clone())
                .collect();
            let removed = next.project.remove_track(id);
            if removed {
                next.selection.remove_track(id);
                for clip_id in &removed_clips {
                    next.selection.remove_clip(clip_id);
                }
            }
            removed
        }
        TimelineAction::MoveTrackUp(id) => next.project.move_track_up(id),
        TimelineAction::MoveTrackDown(id) => next.project.move_track_down(id),
        TimelineAction::AddClip(clip) => {
            all_finite(&[clip.start, clip.end]) && next.project.add_clip(clip.clone())
        }
        TimelineAction::RemoveClip(id) => {
            let removed = next.project.remove_clip(id);
            if removed {
                next.selection.remove_clip(id);
            }
            removed
        }
        TimelineAction::SelectClip(Some(id)) => {
            next.selection.select_clip(id.clone());
            next.selection != state.selection
        }
        TimelineAction::SelectClip(None) => {
            next.selection.clip_ids.clear();
            next.selection != state.selection
        }
        TimelineAction::SelectTrack(Some(id)) => {
            next.selection.select_track(id.clone());
            next.selection != state.selection
        }
        TimelineAction::SelectTrack(None) => {
            next.selection.track_ids.clear();
            next.selection != state.selection
        }
        TimelineAction::MoveClip { id, start } => {
            all_finite(&[*start]) && next.project.move_clip(id, *start)
        }
        TimelineAction::ResizeClip { id, start, end } => {
            all_finite(&[*start, *end]) && next.project.resize_clip(id, *start, *end)
        }
        TimelineAction::SplitClip { id, at } => {
            match all_finite(&[*at]).then(|| next.project.split_clip(id, *at)).flatten() {
                Some((left, _right)) => {
                    next.selection.select_clip(left);
                    true
                }
                None => false,
            }
        }
        TimelineAction::SetClipLabel { id, label } => next.project.set_clip_label(id, label.clone()),
        TimelineAction::SetPlayhead(time) => {
            if all_finite(&[*time]) {
                next.playhead = *time;
            }
            next.playhead != state.playhead
        }
        TimelineAction::SetZoom(zoom) => {
            next.zoom = next.scale.clamp_zoom(*zoom);
            next.zoom != state.zoom
        }
        TimelineAction::ZoomIn => {
            next.zoom = next.scale.zoom_in(next.zoom);
            next.zoom != state.zoom
        }
        TimelineAction::ZoomOut => {
            next.zoom = next.scale.zoom_out(next.zoom);
            next.zoom != state.zoom
        }
    };

    if changed {
        Transition::from_edit(next, true)
    } else {
        debug!("timeline action had no effect: {:?}", action);
        Transition::unchanged(state)
    }
}
