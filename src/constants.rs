//! Shared constants: accent colors, zoom bounds, playback timing and ruler sizing.

pub const ACCENT_AUDIO: &str = "#3b82f6";
pub const ACCENT_CAPTION: &str = "#f97316";
pub const ACCENT_VIDEO: &str = "#22c55e";

/// Zoom bounds for the "pixels per 10 seconds" convention.
pub const PER_TEN_SECONDS_MIN_ZOOM: f64 = 20.0;
pub const PER_TEN_SECONDS_MAX_ZOOM: f64 = 800.0;
pub const PER_TEN_SECONDS_DEFAULT_ZOOM: f64 = 100.0;
pub const ZOOM_IN_FACTOR: f64 = 1.25;
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Zoom level bounds for the "pixels per second times level" convention.
pub const ZOOM_LEVEL_MIN: f64 = 1.0;
pub const ZOOM_LEVEL_MAX: f64 = 10.0;
pub const ZOOM_LEVEL_DEFAULT: f64 = 1.0;
pub const DEFAULT_PIXELS_PER_SECOND: f64 = 50.0;

pub const DEFAULT_PROJECT_DURATION_SECONDS: f64 = 60.0;
pub const DEFAULT_FPS: f64 = 60.0;
pub const PLAYBACK_TICK_INTERVAL_MS: u64 = 16;

pub const RULER_TARGET_PX_PER_TICK: f64 = 90.0;
pub const RULER_NICE_TICKS: [f64; 10] = [0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0];
/// Upper bound on ticks in one ruler, major and frame ticks together.
pub const MAX_RULER_TICKS: usize = 10_000;

pub const MIN_CLIP_WIDTH_FLOOR_PX: f64 = 2.0;
