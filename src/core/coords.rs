//! Time <-> pixel conversion under a zoom factor.
//!
//! Two scaling conventions are supported, each with its own zoom range:
//! - `PerTenSeconds`: zoom is the number of pixels covering ten seconds.
//! - `PerSecondLevel`: zoom is an integer level multiplying a base
//!   pixels-per-second rate.
//!
//! Both map onto the same contract: `pixel_to_time` is the exact inverse
//! of `time_to_pixel` for a given zoom, and both are strictly increasing
//! in time and in zoom.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PIXELS_PER_SECOND, PER_TEN_SECONDS_DEFAULT_ZOOM, PER_TEN_SECONDS_MAX_ZOOM,
    PER_TEN_SECONDS_MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_LEVEL_DEFAULT, ZOOM_LEVEL_MAX,
    ZOOM_LEVEL_MIN, ZOOM_OUT_FACTOR,
};

/// How a zoom factor translates seconds into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleConvention {
    /// Zoom is pixels per 10 seconds, continuous in `[20, 800]`.
    PerTenSeconds,
    /// Zoom is an integer level in `[1, 10]`.
    PerSecondLevel {
        #[serde(default = "default_pixels_per_second")]
        pixels_per_second: f64,
    },
}

fn default_pixels_per_second() -> f64 {
    DEFAULT_PIXELS_PER_SECOND
}

fn base_rate(pixels_per_second: f64) -> f64 {
    if pixels_per_second.is_finite() && pixels_per_second > 0.0 {
        pixels_per_second
    } else {
        DEFAULT_PIXELS_PER_SECOND
    }
}

impl Default for ScaleConvention {
    fn default() -> Self {
        ScaleConvention::PerTenSeconds
    }
}

impl ScaleConvention {
    /// Level-based convention with the default base rate.
    pub fn per_second_level() -> Self {
        ScaleConvention::PerSecondLevel {
            pixels_per_second: DEFAULT_PIXELS_PER_SECOND,
        }
    }

    /// Inclusive `(min, max)` zoom range.
    pub fn zoom_bounds(self) -> (f64, f64) {
        match self {
            ScaleConvention::PerTenSeconds => (PER_TEN_SECONDS_MIN_ZOOM, PER_TEN_SECONDS_MAX_ZOOM),
            ScaleConvention::PerSecondLevel { .. } => (ZOOM_LEVEL_MIN, ZOOM_LEVEL_MAX),
        }
    }

    pub fn default_zoom(self) -> f64 {
        match self {
            ScaleConvention::PerTenSeconds => PER_TEN_SECONDS_DEFAULT_ZOOM,
            ScaleConvention::PerSecondLevel { .. } => ZOOM_LEVEL_DEFAULT,
        }
    }

    /// Clamp a requested zoom into range. Level zoom snaps to whole steps.
    /// Non-finite requests fall back to the default zoom.
    pub fn clamp_zoom(self, zoom: f64) -> f64 {
        if !zoom.is_finite() {
            return self.default_zoom();
        }
        let (min_zoom, max_zoom) = self.zoom_bounds();
        match self {
            ScaleConvention::PerTenSeconds => zoom.clamp(min_zoom, max_zoom),
            ScaleConvention::PerSecondLevel { .. } => zoom.round().clamp(min_zoom, max_zoom),
        }
    }

    /// Next zoom step in.
    pub fn zoom_in(self, zoom: f64) -> f64 {
        match self {
            ScaleConvention::PerTenSeconds => self.clamp_zoom(zoom * ZOOM_IN_FACTOR),
            ScaleConvention::PerSecondLevel { .. } => self.clamp_zoom(zoom.round() + 1.0),
        }
    }

    /// Next zoom step out.
    pub fn zoom_out(self, zoom: f64) -> f64 {
        match self {
            ScaleConvention::PerTenSeconds => self.clamp_zoom(zoom * ZOOM_OUT_FACTOR),
            ScaleConvention::PerSecondLevel { .. } => self.clamp_zoom(zoom.round() - 1.0),
        }
    }

    /// Pixels covering one second at `zoom`.
    ///
    /// A non-positive or non-finite base rate maps with the default rate,
    /// so `pixel_to_time` never divides by zero.
    pub fn pixels_per_second(self, zoom: f64) -> f64 {
        match self {
            ScaleConvention::PerTenSeconds => zoom / 10.0,
            ScaleConvention::PerSecondLevel { pixels_per_second } => base_rate(pixels_per_second) * zoom,
        }
    }

    pub fn time_to_pixel(self, time: f64, zoom: f64) -> f64 {
        time * self.pixels_per_second(zoom)
    }

    pub fn pixel_to_time(self, pixel: f64, zoom: f64) -> f64 {
        pixel / self.pixels_per_second(zoom)
    }

    /// Width in pixels of a `[start, end]` span.
    pub fn span_to_width(self, start: f64, end: f64, zoom: f64) -> f64 {
        self.time_to_pixel(end, zoom) - self.time_to_pixel(start, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn conventions() -> [ScaleConvention; 2] {
        [ScaleConvention::PerTenSeconds, ScaleConvention::per_second_level()]
    }

    #[test]
    fn test_round_trip() {
        for scale in conventions() {
            let (min_zoom, max_zoom) = scale.zoom_bounds();
            for zoom in [min_zoom, (min_zoom + max_zoom) / 2.0, max_zoom, 0.37] {
                for time in [0.0, 0.001, 2.0, 7.5, 123.456, 3600.0] {
                    let px = scale.time_to_pixel(time, zoom);
                    let back = scale.pixel_to_time(px, zoom);
                    assert!((back - time).abs() < EPS * time.max(1.0), "{scale:?} {zoom} {time}");
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_time_and_zoom() {
        for scale in conventions() {
            let (min_zoom, max_zoom) = scale.zoom_bounds();
            assert!(scale.time_to_pixel(1.0, min_zoom) < scale.time_to_pixel(1.5, min_zoom));
            assert!(scale.time_to_pixel(3.0, min_zoom) < scale.time_to_pixel(3.0, max_zoom));
        }
    }

    #[test]
    fn test_per_ten_seconds_scaling() {
        let scale = ScaleConvention::PerTenSeconds;
        assert!((scale.time_to_pixel(10.0, 100.0) - 100.0).abs() < EPS);
        assert!((scale.span_to_width(2.0, 12.0, 200.0) - 200.0).abs() < EPS);
    }

    #[test]
    fn test_level_scaling() {
        let scale = ScaleConvention::PerSecondLevel { pixels_per_second: 50.0 };
        assert!((scale.time_to_pixel(2.0, 3.0) - 300.0).abs() < EPS);
    }

    #[test]
    fn test_zoom_clamp() {
        let scale = ScaleConvention::PerTenSeconds;
        assert_eq!(scale.clamp_zoom(5.0), 20.0);
        assert_eq!(scale.clamp_zoom(-1.0), 20.0);
        assert_eq!(scale.clamp_zoom(10_000.0), 800.0);
        assert_eq!(scale.clamp_zoom(f64::NAN), 100.0);

        let level = ScaleConvention::per_second_level();
        assert_eq!(level.clamp_zoom(0.0), 1.0);
        assert_eq!(level.clamp_zoom(11.0), 10.0);
        assert_eq!(level.clamp_zoom(4.4), 4.0);
    }

    #[test]
    fn test_zoom_steps_stay_in_range() {
        let scale = ScaleConvention::PerTenSeconds;
        assert_eq!(scale.zoom_in(100.0), 125.0);
        assert_eq!(scale.zoom_out(100.0), 80.0);
        assert_eq!(scale.zoom_in(790.0), 800.0);
        assert_eq!(scale.zoom_out(21.0), 20.0);

        let level = ScaleConvention::per_second_level();
        assert_eq!(level.zoom_in(3.0), 4.0);
        assert_eq!(level.zoom_in(10.0), 10.0);
        assert_eq!(level.zoom_out(1.0), 1.0);
    }

    #[test]
    fn test_convention_serialization() {
        let json = serde_json::to_string(&ScaleConvention::per_second_level()).unwrap();
        let parsed: ScaleConvention = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ScaleConvention::per_second_level());

        let parsed: ScaleConvention = serde_json::from_str(r#"{"kind":"per_second_level"}"#).unwrap();
        assert_eq!(parsed, ScaleConvention::per_second_level());
    }

    #[test]
    fn test_invalid_base_rate_uses_default() {
        let fallback = ScaleConvention::per_second_level();
        for rate in [0.0, -25.0, f64::NAN, f64::INFINITY] {
            let scale = ScaleConvention::PerSecondLevel { pixels_per_second: rate };
            assert_eq!(scale.pixels_per_second(2.0), fallback.pixels_per_second(2.0));
            let back = scale.pixel_to_time(scale.time_to_pixel(4.0, 2.0), 2.0);
            assert!((back - 4.0).abs() < EPS, "{rate}");
        }
    }
}
