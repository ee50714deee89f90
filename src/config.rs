//! Editor configuration loaded from a JSON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FPS, DEFAULT_PROJECT_DURATION_SECONDS, PLAYBACK_TICK_INTERVAL_MS};
use crate::core::ScaleConvention;
use crate::error::{EditorError, Result};
use crate::state::{Project, ProjectSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Time-to-pixel convention for the timeline.
    #[serde(default)]
    pub scale: ScaleConvention,
    /// Delay between playback ticks in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Timeline length given to new projects.
    #[serde(default = "default_duration_seconds")]
    pub default_duration_seconds: f64,
    #[serde(default = "default_fps")]
    pub fps: f64,
}

fn default_tick_interval_ms() -> u64 {
    PLAYBACK_TICK_INTERVAL_MS
}

fn default_duration_seconds() -> f64 {
    DEFAULT_PROJECT_DURATION_SECONDS
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            scale: ScaleConvention::default(),
            tick_interval_ms: default_tick_interval_ms(),
            default_duration_seconds: default_duration_seconds(),
            fps: default_fps(),
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: EditorConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("failed to load config {:?}, using defaults: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(EditorError::InvalidConfig("tick_interval_ms must be positive".into()));
        }
        if !(self.default_duration_seconds.is_finite() && self.default_duration_seconds > 0.0) {
            return Err(EditorError::InvalidConfig(
                "default_duration_seconds must be positive".into(),
            ));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(EditorError::InvalidConfig("fps must be positive".into()));
        }
        if let ScaleConvention::PerSecondLevel { pixels_per_second } = self.scale {
            if !(pixels_per_second.is_finite() && pixels_per_second > 0.0) {
                return Err(EditorError::InvalidConfig(
                    "pixels_per_second must be positive".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Empty project using the configured defaults.
    pub fn new_project(&self, name: impl Into<String>) -> Project {
        Project {
            settings: ProjectSettings {
                fps: self.fps,
                duration_seconds: self.default_duration_seconds,
            },
            ..Project::new(name)
        }
    }
}
