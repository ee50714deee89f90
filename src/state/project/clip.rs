use serde::{Deserialize, Serialize};

use crate::constants::{ACCENT_AUDIO, ACCENT_CAPTION, ACCENT_VIDEO};
use crate::state::{ClipId, TrackId};

/// Kind of media a clip refers to. Only affects its rendering color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipKind {
    #[default]
    Video,
    Audio,
    Caption,
}

impl ClipKind {
    pub fn accent_color(self) -> &'static str {
        match self {
            ClipKind::Video => ACCENT_VIDEO,
            ClipKind::Audio => ACCENT_AUDIO,
            ClipKind::Caption => ACCENT_CAPTION,
        }
    }
}

/// A clip placed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique identifier
    pub id: ClipId,
    /// The track this clip is on
    pub track_id: TrackId,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Always `end - start`; kept in sync by `set_bounds`.
    #[serde(default)]
    pub duration: f64,
    /// User-facing label
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: ClipKind,
}

impl Clip {
    /// Create a new clip with a generated id
    pub fn new(track_id: impl Into<TrackId>, start: f64, end: f64) -> Self {
        Self {
            id: ClipId::generate(),
            track_id: track_id.into(),
            start,
            end,
            duration: end - start,
            label: String::new(),
            kind: ClipKind::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ClipId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_kind(mut self, kind: ClipKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace both boundaries and recompute the duration.
    pub fn set_bounds(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = end;
        self.duration = end - start;
    }

    /// Check if this clip overlaps with a time range
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.start < end && self.end > start
    }

    /// True when `time` lies strictly between the clip's boundaries.
    pub fn contains_strictly(&self, time: f64) -> bool {
        self.start < time && time < self.end
    }

    /// True when the boundaries describe a non-empty span.
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_overlap() {
        let clip = Clip::new("T1", 5.0, 15.0);
        assert!(clip.overlaps(0.0, 10.0)); // Overlaps start
        assert!(clip.overlaps(10.0, 20.0)); // Overlaps end
        assert!(clip.overlaps(7.0, 12.0)); // Overlaps middle
        assert!(!clip.overlaps(0.0, 5.0)); // Just before
        assert!(!clip.overlaps(15.0, 20.0)); // Just after
    }

    #[test]
    fn test_set_bounds_recomputes_duration() {
        let mut clip = Clip::new("T1", 2.0, 12.0);
        assert_eq!(clip.duration, 10.0);
        clip.set_bounds(3.5, 4.0);
        assert_eq!(clip.duration, clip.end - clip.start);
    }

    #[test]
    fn test_contains_strictly_excludes_edges() {
        let clip = Clip::new("T1", 2.0, 12.0);
        assert!(clip.contains_strictly(7.0));
        assert!(!clip.contains_strictly(2.0));
        assert!(!clip.contains_strictly(12.0));
        assert!(!clip.contains_strictly(15.0));
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ClipKind::Audio.accent_color(), ACCENT_AUDIO);
        assert_ne!(ClipKind::Video.accent_color(), ClipKind::Caption.accent_color());
    }
}
