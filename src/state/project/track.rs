use serde::{Deserialize, Serialize};

use crate::state::TrackId;

/// Category of a track. Informational only: clips of any kind may sit on any track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackType {
    /// Video track - holds video and image clips
    #[default]
    Video,
    /// Audio track - holds audio clips
    Audio,
    /// Caption track - holds subtitle/caption clips
    Caption,
}

/// A track in the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: TrackId,
    /// Display name (e.g., "Video 1", "Audio 1")
    pub name: String,
    /// Type of track
    #[serde(default)]
    pub track_type: TrackType,
}

impl Track {
    /// Create a new track with a generated id
    pub fn new(name: impl Into<String>, track_type: TrackType) -> Self {
        Self::with_id(TrackId::generate(), name, track_type)
    }

    /// Create a track with a caller-chosen id
    pub fn with_id(id: impl Into<TrackId>, name: impl Into<String>, track_type: TrackType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            track_type,
        }
    }

    /// Create the default video track
    pub fn default_video() -> Self {
        Self::new("Video 1", TrackType::Video)
    }

    /// Create the default audio track
    pub fn default_audio() -> Self {
        Self::new("Audio 1", TrackType::Audio)
    }
}
