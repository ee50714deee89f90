use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FPS, DEFAULT_PROJECT_DURATION_SECONDS};

/// Project-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Frame rate (frames per second), used for ruler frame ticks
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Project timeline duration in seconds
    #[serde(default = "default_project_duration_seconds")]
    pub duration_seconds: f64,
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

fn default_project_duration_seconds() -> f64 {
    DEFAULT_PROJECT_DURATION_SECONDS
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            duration_seconds: default_project_duration_seconds(),
        }
    }
}
