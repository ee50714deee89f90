//! Timeline display geometry
//!
//! Everything the timeline panel needs to draw tracks, clips, the ruler
//! and the playhead, derived from an `EditorState` snapshot through the
//! coordinate mapper.

mod ruler;
mod track_row;

pub use ruler::{major_tick_spacing, ruler_ticks, RulerTick};
pub use track_row::{clip_geometry, track_rows, ClipGeometry, TrackRow};

use crate::state::EditorState;

/// Horizontal position of the playhead.
pub fn playhead_x(state: &EditorState) -> f64 {
    state.scale.time_to_pixel(state.playhead, state.zoom)
}

/// Full scrollable width of the timeline content.
pub fn content_width(state: &EditorState) -> f64 {
    state.scale.time_to_pixel(state.duration(), state.zoom)
}

/// Time under a click at `x` (relative to the content's left edge), clamped
/// to the timeline.
pub fn time_at_x(state: &EditorState, x: f64) -> f64 {
    state
        .scale
        .pixel_to_time(x, state.zoom)
        .clamp(0.0, state.duration())
}

/// Ruler ticks for the snapshot.
pub fn ruler_for(state: &EditorState) -> Vec<RulerTick> {
    ruler_ticks(
        state.duration(),
        state.zoom,
        state.scale,
        state.project.settings.fps,
    )
}
