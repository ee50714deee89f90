use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::{Clip, ProjectSettings, Track, TrackType};
use crate::state::{ClipId, TrackId};

/// The main project container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Schema version for future compatibility
    pub version: String,
    /// Project name
    pub name: String,
    /// Project settings (fps, duration)
    #[serde(default)]
    pub settings: ProjectSettings,
    /// All tracks in the project (ordered top to bottom)
    pub tracks: Vec<Track>,
    /// All clips placed on tracks
    pub clips: Vec<Clip>,
    /// Timestamp of the last successful save
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: "Untitled Project".to_string(),
            settings: ProjectSettings::default(),
            tracks: vec![Track::default_video(), Track::default_audio()],
            clips: Vec::new(),
            saved_at: None,
        }
    }
}

impl Project {
    /// Create a new project with the default tracks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a project with no tracks at all
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
            ..Default::default()
        }
    }

    /// Get the project duration (end of last clip, or the configured length if longer)
    pub fn duration(&self) -> f64 {
        let clip_end = self.clips.iter().map(|c| c.end).fold(0.0, f64::max);
        let configured = self.settings.duration_seconds.max(0.0);
        clip_end.max(configured)
    }

    /// Find a track by ID
    pub fn find_track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Find a clip by ID
    pub fn find_clip(&self, id: &ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| &c.id == id)
    }

    /// Get all clips on a specific track
    pub fn clips_on_track(&self, track_id: &TrackId) -> Vec<&Clip> {
        self.clips.iter().filter(|c| &c.track_id == track_id).collect()
    }

    /// Get all clips that overlap a time range
    pub fn clips_in_range(&self, start: f64, end: f64) -> Vec<&Clip> {
        self.clips.iter().filter(|c| c.overlaps(start, end)).collect()
    }

    /// Get the clip under `time` on a track, if any
    pub fn clip_at(&self, track_id: &TrackId, time: f64) -> Option<&Clip> {
        self.clips
            .iter()
            .find(|c| &c.track_id == track_id && c.start <= time && time < c.end)
    }

    /// Append a track. Rejects a duplicate id.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.find_track(&track.id).is_some() {
            warn!("rejecting track with duplicate id {}", track.id);
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Add a new track of the given type, named after how many of that type exist
    pub fn add_track_of_type(&mut self, track_type: TrackType) -> TrackId {
        let count = self.tracks.iter().filter(|t| t.track_type == track_type).count();
        let prefix = match track_type {
            TrackType::Video => "Video",
            TrackType::Audio => "Audio",
            TrackType::Caption => "Captions",
        };
        let track = Track::new(format!("{} {}", prefix, count + 1), track_type);
        let id = track.id.clone();
        self.tracks.push(track);
        id
    }

    /// Remove a track by ID together with every clip on it
    pub fn remove_track(&mut self, id: &TrackId) -> bool {
        let len = self.tracks.len();
        self.tracks.retain(|t| &t.id != id);
        if self.tracks.len() == len {
            return false;
        }
        self.clips.retain(|c| &c.track_id != id);
        true
    }

    /// Move a track up in the list (visually higher)
    pub fn move_track_up(&mut self, id: &TrackId) -> bool {
        if let Some(index) = self.tracks.iter().position(|t| &t.id == id) {
            if index > 0 {
                self.tracks.swap(index, index - 1);
                return true;
            }
        }
        false
    }

    /// Move a track down in the list (visually lower)
    pub fn move_track_down(&mut self, id: &TrackId) -> bool {
        if let Some(index) = self.tracks.iter().position(|t| &t.id == id) {
            if index + 1 < self.tracks.len() {
                self.tracks.swap(index, index + 1);
                return true;
            }
        }
        false
    }

    /// Add a clip to the project. Rejects a duplicate id; a clip whose
    /// track does not exist is kept.
    pub fn add_clip(&mut self, mut clip: Clip) -> bool {
        if self.find_clip(&clip.id).is_some() {
            warn!("rejecting clip with duplicate id {}", clip.id);
            return false;
        }
        if self.find_track(&clip.track_id).is_none() {
            warn!("clip {} references unknown track {}", clip.id, clip.track_id);
        }
        clip.duration = clip.end - clip.start;
        self.clips.push(clip);
        true
    }

    /// Remove a clip by ID
    pub fn remove_clip(&mut self, id: &ClipId) -> bool {
        let len = self.clips.len();
        self.clips.retain(|c| &c.id != id);
        self.clips.len() < len
    }

    /// Move a clip to a new start time. The end stays where it is.
    pub fn move_clip(&mut self, id: &ClipId, new_start: f64) -> bool {
        if let Some(clip) = self.clips.iter_mut().find(|c| &c.id == id) {
            let end = clip.end;
            clip.set_bounds(new_start, end);
            if !clip.is_well_formed() {
                warn!("clip {} moved to start {} at or past its end {}", clip.id, new_start, end);
            }
            return true;
        }
        false
    }

    /// Resize a clip (set both boundaries)
    pub fn resize_clip(&mut self, id: &ClipId, new_start: f64, new_end: f64) -> bool {
        if let Some(clip) = self.clips.iter_mut().find(|c| &c.id == id) {
            clip.set_bounds(new_start, new_end);
            if !clip.is_well_formed() {
                warn!("clip {} resized to empty span [{}, {}]", clip.id, new_start, new_end);
            }
            return true;
        }
        false
    }

    /// Split a clip in two at `at`, which must lie strictly inside it.
    /// The pieces take the original's place in the clip list.
    /// Returns the ids of the left and right pieces.
    pub fn split_clip(&mut self, id: &ClipId, at: f64) -> Option<(ClipId, ClipId)> {
        let index = self.clips.iter().position(|c| &c.id == id)?;
        if !self.clips[index].contains_strictly(at) {
            return None;
        }

        let original = self.clips.remove(index);
        let left_id = self.unique_clip_id(original.id.suffixed("a"));
        let right_id = self.unique_clip_id(original.id.suffixed("b"));

        let mut left = original.clone().with_id(left_id.clone());
        left.set_bounds(original.start, at);
        let mut right = original.clone().with_id(right_id.clone());
        right.set_bounds(at, original.end);

        self.clips.insert(index, left);
        self.clips.insert(index + 1, right);
        Some((left_id, right_id))
    }

    /// Update a clip label by ID
    pub fn set_clip_label(&mut self, id: &ClipId, label: impl Into<String>) -> bool {
        let label = label.into();
        if let Some(clip) = self.clips.iter_mut().find(|c| &c.id == id) {
            if clip.label == label {
                return false;
            }
            clip.label = label;
            return true;
        }
        false
    }

    fn unique_clip_id(&self, base: ClipId) -> ClipId {
        if self.find_clip(&base).is_none() {
            return base;
        }
        let mut counter = 2;
        loop {
            let candidate = base.suffixed(&counter.to_string());
            if self.find_clip(&candidate).is_none() {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClipKind;

    fn sample_project() -> Project {
        let mut project = Project::empty("Test");
        project.add_track(Track::with_id("T1", "Video 1", TrackType::Video));
        project.add_track(Track::with_id("T2", "Audio 1", TrackType::Audio));
        project.add_clip(Clip::new("T1", 2.0, 12.0).with_id("C1").with_label("Sample Clip"));
        project.add_clip(Clip::new("T2", 0.0, 4.0).with_id("C2").with_kind(ClipKind::Audio));
        project.add_clip(Clip::new("T1", 14.0, 20.0).with_id("C3"));
        project
    }

    #[test]
    fn test_default_project() {
        let project = Project::default();
        assert_eq!(project.tracks.len(), 2);
        assert_eq!(project.tracks[0].track_type, TrackType::Video);
        assert_eq!(project.tracks[1].track_type, TrackType::Audio);
    }

    #[test]
    fn test_add_tracks() {
        let mut project = Project::default();
        let initial_count = project.tracks.len();

        project.add_track_of_type(TrackType::Video);
        assert_eq!(project.tracks.len(), initial_count + 1);
        assert_eq!(project.tracks.last().unwrap().name, "Video 2");

        project.add_track_of_type(TrackType::Caption);
        assert_eq!(project.tracks.last().unwrap().name, "Captions 1");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut project = sample_project();
        assert!(!project.add_track(Track::with_id("T1", "Again", TrackType::Audio)));
        assert!(!project.add_clip(Clip::new("T2", 0.0, 1.0).with_id("C1")));
        assert_eq!(project.tracks.len(), 2);
        assert_eq!(project.clips.len(), 3);
    }

    #[test]
    fn test_orphan_clip_accepted() {
        let mut project = sample_project();
        assert!(project.add_clip(Clip::new("missing", 0.0, 1.0).with_id("C9")));
        assert!(project.find_clip(&ClipId::from("C9")).is_some());
    }

    #[test]
    fn test_remove_track_cascades_only_its_clips() {
        let mut project = sample_project();
        assert!(project.remove_track(&TrackId::from("T1")));
        let ids: Vec<&str> = project.clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C2"]);
        assert!(!project.remove_track(&TrackId::from("T1")));
    }

    #[test]
    fn test_move_clip_keeps_end() {
        let mut project = sample_project();
        assert!(project.move_clip(&ClipId::from("C1"), 4.0));
        let clip = project.find_clip(&ClipId::from("C1")).unwrap();
        assert_eq!((clip.start, clip.end, clip.duration), (4.0, 12.0, 8.0));

        // Past the end is accepted as-is.
        assert!(project.move_clip(&ClipId::from("C1"), 13.0));
        let clip = project.find_clip(&ClipId::from("C1")).unwrap();
        assert!(!clip.is_well_formed());
    }

    #[test]
    fn test_resize_keeps_duration_consistent() {
        let mut project = sample_project();
        assert!(project.resize_clip(&ClipId::from("C2"), 0.25, 3.1));
        let clip = project.find_clip(&ClipId::from("C2")).unwrap();
        assert_eq!(clip.duration, clip.end - clip.start);
        assert!(!project.resize_clip(&ClipId::from("nope"), 0.0, 1.0));
    }

    #[test]
    fn test_split_clip() {
        let mut project = sample_project();
        let (left, right) = project.split_clip(&ClipId::from("C1"), 7.0).unwrap();
        assert_eq!(left.as_str(), "C1-a");
        assert_eq!(right.as_str(), "C1-b");
        assert!(project.find_clip(&ClipId::from("C1")).is_none());

        let left = project.find_clip(&left).unwrap();
        let right = project.find_clip(&right).unwrap();
        assert_eq!((left.start, left.end), (2.0, 7.0));
        assert_eq!((right.start, right.end), (7.0, 12.0));
        assert_eq!(left.end, right.start);
        assert_eq!(left.label, "Sample Clip");
        assert_eq!(right.track_id, TrackId::from("T1"));
        // Pieces sit where the original was.
        assert_eq!(project.clips[0].id, left.id);
        assert_eq!(project.clips[1].id, right.id);
    }

    #[test]
    fn test_split_rejects_boundaries_and_outside() {
        let mut project = sample_project();
        let before = project.clone();
        for at in [2.0, 12.0, 15.0, -1.0] {
            assert!(project.split_clip(&ClipId::from("C1"), at).is_none());
        }
        assert!(project.split_clip(&ClipId::from("nope"), 5.0).is_none());
        assert_eq!(project, before);
    }

    #[test]
    fn test_split_ids_stay_unique() {
        let mut project = sample_project();
        project.add_clip(Clip::new("T2", 30.0, 40.0).with_id("C1-a"));
        let (left, right) = project.split_clip(&ClipId::from("C1"), 5.0).unwrap();
        assert_eq!(left.as_str(), "C1-a-2");
        assert_eq!(right.as_str(), "C1-b");

        let mut project = sample_project();
        project.add_clip(Clip::new("T2", 30.0, 40.0).with_id("C1-a"));
        project.add_clip(Clip::new("T2", 40.0, 50.0).with_id("C1-b"));
        let (left, right) = project.split_clip(&ClipId::from("C1"), 5.0).unwrap();
        assert_eq!(left.as_str(), "C1-a-2");
        assert_eq!(right.as_str(), "C1-b-2");
    }

    #[test]
    fn test_duration_covers_clips() {
        let mut project = sample_project();
        project.settings.duration_seconds = 10.0;
        assert_eq!(project.duration(), 20.0);
        project.settings.duration_seconds = 90.0;
        assert_eq!(project.duration(), 90.0);
    }

    #[test]
    fn test_clip_at_and_range() {
        let project = sample_project();
        let t1 = TrackId::from("T1");
        assert_eq!(project.clip_at(&t1, 2.0).map(|c| c.id.as_str()), Some("C1"));
        assert!(project.clip_at(&t1, 13.0).is_none());
        assert_eq!(project.clips_in_range(11.0, 15.0).len(), 2);
        assert_eq!(project.clips_on_track(&t1).len(), 2);
    }

    #[test]
    fn test_move_track_order() {
        let mut project = sample_project();
        assert!(!project.move_track_up(&TrackId::from("T1")));
        assert!(project.move_track_up(&TrackId::from("T2")));
        assert_eq!(project.tracks[0].id, TrackId::from("T2"));
        assert!(!project.move_track_down(&TrackId::from("T1")));
    }

    #[test]
    fn test_project_serialization() {
        let project = sample_project();
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
