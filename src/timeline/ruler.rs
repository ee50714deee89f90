use crate::constants::{MAX_RULER_TICKS, RULER_NICE_TICKS, RULER_TARGET_PX_PER_TICK};
use crate::core::ScaleConvention;

/// Pixels per second above which individual frame ticks are drawn.
const FRAME_TICK_MIN_PX_PER_SECOND: f64 = 240.0;

/// One tick on the time ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerTick {
    pub time: f64,
    pub x: f64,
    /// Major ticks carry a `m:ss` label; frame ticks don't.
    pub label: Option<String>,
}

impl RulerTick {
    pub fn is_major(&self) -> bool {
        self.label.is_some()
    }
}

/// Seconds between labelled ticks so they land roughly 90px apart.
pub fn major_tick_spacing(pixels_per_second: f64) -> f64 {
    let target_seconds = (RULER_TARGET_PX_PER_TICK / pixels_per_second.max(0.1)).max(0.5);
    RULER_NICE_TICKS
        .iter()
        .copied()
        .find(|tick| *tick >= target_seconds)
        .unwrap_or(RULER_NICE_TICKS[RULER_NICE_TICKS.len() - 1])
}

fn format_label(time: f64) -> String {
    let whole = time as i64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Ticks for a ruler covering `[0, duration]`, sorted by time.
///
/// At most `MAX_RULER_TICKS` are produced; past that the ruler stops
/// early instead of allocating for absurdly long timelines.
pub fn ruler_ticks(duration: f64, zoom: f64, scale: ScaleConvention, fps: f64) -> Vec<RulerTick> {
    let duration = duration.max(0.0);
    let pixels_per_second = scale.pixels_per_second(zoom);
    let spacing = major_tick_spacing(pixels_per_second);
    let num_ticks = ((duration / spacing).floor() + 1.0).min(MAX_RULER_TICKS as f64) as usize;

    let mut ticks: Vec<RulerTick> = (0..num_ticks)
        .map(|i| {
            let time = i as f64 * spacing;
            RulerTick {
                time,
                x: scale.time_to_pixel(time, zoom),
                label: Some(format_label(time)),
            }
        })
        .collect();

    // Frame ticks only at high zoom levels, skipping whole seconds.
    if pixels_per_second >= FRAME_TICK_MIN_PX_PER_SECOND {
        let fps = fps.max(1.0);
        let fps_i = fps.round().max(1.0) as i64;
        let end_frame = (duration * fps).floor().min(MAX_RULER_TICKS as f64 * fps) as i64;
        let room = MAX_RULER_TICKS.saturating_sub(ticks.len());
        let frame_ticks = (0..=end_frame)
            .filter(|frame| frame % fps_i != 0)
            .take(room)
            .map(|frame| {
                let time = frame as f64 / fps;
                RulerTick {
                    time,
                    x: scale.time_to_pixel(time, zoom),
                    label: None,
                }
            });
        ticks.extend(frame_ticks);
        ticks.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_picks_nice_value() {
        // 10 px per second -> want 9s -> 10s ticks
        assert_eq!(major_tick_spacing(10.0), 10.0);
        // 100 px per second -> want 0.9s -> 1s ticks
        assert_eq!(major_tick_spacing(100.0), 1.0);
        // Very zoomed out caps at the largest step
        assert_eq!(major_tick_spacing(0.01), 300.0);
    }

    #[test]
    fn test_major_ticks_cover_duration() {
        let scale = ScaleConvention::PerTenSeconds;
        // zoom 100 -> 10 px/s -> 10s spacing
        let ticks = ruler_ticks(60.0, 100.0, scale, 60.0);
        assert_eq!(ticks.len(), 7);
        assert!(ticks.iter().all(RulerTick::is_major));
        assert_eq!(ticks[1].label.as_deref(), Some("0:10"));
        assert_eq!(ticks[6].label.as_deref(), Some("1:00"));
        assert_eq!(ticks[6].x, 600.0);
    }

    #[test]
    fn test_frame_ticks_at_high_zoom() {
        let scale = ScaleConvention::PerSecondLevel { pixels_per_second: 50.0 };
        // level 10 -> 500 px/s
        let ticks = ruler_ticks(1.0, 10.0, scale, 4.0);
        let minor: Vec<&RulerTick> = ticks.iter().filter(|t| !t.is_major()).collect();
        assert_eq!(minor.len(), 3);
        assert!(ticks.windows(2).all(|pair| pair[0].time <= pair[1].time));
    }

    #[test]
    fn test_huge_timeline_is_capped() {
        // zoom 20 -> 2 px/s -> 60s spacing
        let ticks = ruler_ticks(1e15, 20.0, ScaleConvention::PerTenSeconds, 60.0);
        assert_eq!(ticks.len(), MAX_RULER_TICKS);
        assert_eq!(ticks[1].time, 60.0);

        let scale = ScaleConvention::PerSecondLevel { pixels_per_second: 50.0 };
        let ticks = ruler_ticks(1e15, 10.0, scale, 60.0);
        assert_eq!(ticks.len(), MAX_RULER_TICKS);
        assert!(ticks.windows(2).all(|pair| pair[0].time <= pair[1].time));
    }
}
