//! Snapshot of everything the timeline panel renders.

use crate::core::{ScaleConvention, TransportState};
use crate::state::{Clip, Project, SelectionState};

/// One immutable editor snapshot.
///
/// Snapshots are never mutated after they are handed out; every edit
/// produces a new one (see `state::action::apply`).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub project: Project,
    /// Playhead position in seconds.
    pub playhead: f64,
    /// Zoom factor, interpreted by `scale`.
    pub zoom: f64,
    pub scale: ScaleConvention,
    pub selection: SelectionState,
    pub transport: TransportState,
}

impl EditorState {
    pub fn new(project: Project, scale: ScaleConvention) -> Self {
        Self {
            project,
            playhead: 0.0,
            zoom: scale.default_zoom(),
            scale,
            selection: SelectionState::default(),
            transport: TransportState::Stopped,
        }
    }

    /// Total timeline length used for playback clamping.
    pub fn duration(&self) -> f64 {
        self.project.duration()
    }

    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    /// The clip currently selected, if it still exists.
    pub fn selected_clip(&self) -> Option<&Clip> {
        self.selection
            .primary_clip()
            .and_then(|id| self.project.find_clip(id))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Project::default(), ScaleConvention::default())
    }
}
