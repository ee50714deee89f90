use crate::constants::MIN_CLIP_WIDTH_FLOOR_PX;
use crate::state::{Clip, ClipId, EditorState, TrackId, TrackType};

/// On-screen rectangle of one clip, relative to the track's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipGeometry {
    pub clip_id: ClipId,
    pub left: f64,
    pub width: f64,
    pub color: &'static str,
    pub label: String,
    pub selected: bool,
}

/// One track lane and the clips drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub track_id: TrackId,
    pub name: String,
    pub track_type: TrackType,
    pub selected: bool,
    pub clips: Vec<ClipGeometry>,
}

/// Geometry of a single clip at the state's zoom.
/// Very short clips still get a sliver so they stay clickable.
pub fn clip_geometry(state: &EditorState, clip: &Clip) -> ClipGeometry {
    let left = state.scale.time_to_pixel(clip.start, state.zoom);
    let width = state
        .scale
        .span_to_width(clip.start, clip.end, state.zoom)
        .max(MIN_CLIP_WIDTH_FLOOR_PX);
    ClipGeometry {
        clip_id: clip.id.clone(),
        left,
        width,
        color: clip.kind.accent_color(),
        label: clip.label.clone(),
        selected: state.selection.clip_ids.contains(&clip.id),
    }
}

/// Rows for every track in display order. Clips whose track is missing
/// are not drawn.
pub fn track_rows(state: &EditorState) -> Vec<TrackRow> {
    state
        .project
        .tracks
        .iter()
        .map(|track| TrackRow {
            track_id: track.id.clone(),
            name: track.name.clone(),
            track_type: track.track_type,
            selected: state.selection.track_ids.contains(&track.id),
            clips: state
                .project
                .clips_on_track(&track.id)
                .into_iter()
                .map(|clip| clip_geometry(state, clip))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScaleConvention;
    use crate::state::{apply, ClipKind, Project, TimelineAction, Track};

    fn state() -> EditorState {
        let mut project = Project::empty("Rows");
        project.add_track(Track::with_id("T1", "Video 1", TrackType::Video));
        project.add_track(Track::with_id("T2", "Audio 1", TrackType::Audio));
        project.add_clip(Clip::new("T1", 2.0, 12.0).with_id("C1").with_label("Sample Clip"));
        project.add_clip(Clip::new("T2", 1.0, 1.01).with_id("C2").with_kind(ClipKind::Audio));
        project.add_clip(Clip::new("ghost", 0.0, 5.0).with_id("C3"));
        let state = EditorState::new(project, ScaleConvention::PerTenSeconds);
        apply(&state, &TimelineAction::SelectClip(Some(ClipId::from("C1")))).state
    }

    #[test]
    fn test_rows_follow_track_order() {
        let rows = track_rows(&state());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].track_id, TrackId::from("T1"));
        assert_eq!(rows[0].clips.len(), 1);
        assert_eq!(rows[1].clips.len(), 1);
    }

    #[test]
    fn test_clip_geometry_uses_zoom() {
        let rows = track_rows(&state());
        let clip = &rows[0].clips[0];
        // zoom 100 px per 10s
        assert_eq!(clip.left, 20.0);
        assert_eq!(clip.width, 100.0);
        assert!(clip.selected);
        assert_eq!(clip.label, "Sample Clip");
    }

    #[test]
    fn test_short_clip_keeps_min_width() {
        let rows = track_rows(&state());
        let clip = &rows[1].clips[0];
        assert_eq!(clip.width, MIN_CLIP_WIDTH_FLOOR_PX);
        assert_eq!(clip.color, ClipKind::Audio.accent_color());
        assert!(!clip.selected);
    }
}
