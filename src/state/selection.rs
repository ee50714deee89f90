//! Selection state shared across views.

use serde::{Deserialize, Serialize};

use crate::state::{ClipId, TrackId};

/// Tracks the current selection in the timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Selected clip IDs in the timeline.
    pub clip_ids: Vec<ClipId>,
    /// Selected track IDs in the timeline.
    pub track_ids: Vec<TrackId>,
}

impl SelectionState {
    /// Clear all selections.
    pub fn clear(&mut self) {
        self.clip_ids.clear();
        self.track_ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.clip_ids.is_empty() && self.track_ids.is_empty()
    }

    /// Replace the selection with a single clip.
    pub fn select_clip(&mut self, clip_id: ClipId) {
        self.clear();
        self.clip_ids.push(clip_id);
    }

    /// Remove a clip from selection, if present.
    pub fn remove_clip(&mut self, clip_id: &ClipId) {
        self.clip_ids.retain(|id| id != clip_id);
    }

    /// Return the primary selected clip, if any.
    pub fn primary_clip(&self) -> Option<&ClipId> {
        self.clip_ids.first()
    }

    /// Replace the selection with a single track.
    pub fn select_track(&mut self, track_id: TrackId) {
        self.clear();
        self.track_ids.push(track_id);
    }

    /// Remove a track from selection, if present.
    pub fn remove_track(&mut self, track_id: &TrackId) {
        self.track_ids.retain(|id| id != track_id);
    }

    /// Return the primary selected track, if any.
    pub fn primary_track(&self) -> Option<&TrackId> {
        self.track_ids.first()
    }
}
