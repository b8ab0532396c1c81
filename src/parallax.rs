/// Linear map from scroll progress to a vertical translation in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRange {
    pub from_percent: f64,
    pub to_percent: f64,
}

impl Default for ParallaxRange {
    fn default() -> Self {
        Self {
            from_percent: 0.0,
            to_percent: -50.0,
        }
    }
}

impl ParallaxRange {
    pub fn translate_percent(&self, progress: f64) -> f64 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let value = self.from_percent + (self.to_percent - self.from_percent) * progress;
        // avoid rendering "-0%"
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }

    /// CSS length for the layer's `translateY`, e.g. `"-25%"`.
    pub fn translate_y(&self, progress: f64) -> String {
        format!("{}%", self.translate_percent(progress))
    }
}

/// Scroll progress of a container through the viewport: 0 when its top edge
/// sits on the viewport's bottom edge, 1 when its bottom edge leaves the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Whether the container is close enough to the viewport to hint
/// `will-change: transform`.
pub fn is_near_viewport(top: f64, height: f64, viewport_height: f64) -> bool {
    top < viewport_height && top > -height
}

pub fn will_change(top: f64, height: f64, viewport_height: f64) -> &'static str {
    if is_near_viewport(top, height, viewport_height) {
        "transform"
    } else {
        "auto"
    }
}

const SWAY_PERIOD_PX: f64 = 500.0;
const SWAY_AMPLITUDE_PX: f64 = 20.0;

/// Vertical sway in px for a gallery card; even cards follow sine, odd cosine.
pub fn card_sway(index: usize, scroll_offset: f64) -> f64 {
    let phase = scroll_offset / SWAY_PERIOD_PX;
    if index % 2 == 0 {
        phase.sin() * SWAY_AMPLITUDE_PX
    } else {
        phase.cos() * SWAY_AMPLITUDE_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_bounds() {
        let range = ParallaxRange::default();

        assert_eq!(range.translate_y(0.0), "0%");
        assert_eq!(range.translate_y(1.0), "-50%");
        assert_eq!(range.translate_y(0.5), "-25%");
    }

    #[test]
    fn translation_is_linear_and_monotonic() {
        let range = ParallaxRange::default();
        let samples: Vec<f64> = (0..=10)
            .map(|step| range.translate_percent(f64::from(step) / 10.0))
            .collect();

        for pair in samples.windows(2) {
            assert!(pair[1] < pair[0]);
            assert!((pair[0] - pair[1] - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let range = ParallaxRange::default();

        assert_eq!(range.translate_y(-0.5), "0%");
        assert_eq!(range.translate_y(3.0), "-50%");
        assert_eq!(range.translate_y(f64::NAN), "0%");
    }

    #[test]
    fn progress_spans_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
    }

    #[test]
    fn will_change_only_near_viewport() {
        assert_eq!(will_change(100.0, 400.0, 800.0), "transform");
        assert_eq!(will_change(900.0, 400.0, 800.0), "auto");
        assert_eq!(will_change(-500.0, 400.0, 800.0), "auto");
    }

    #[test]
    fn sway_alternates_between_sine_and_cosine() {
        assert_eq!(card_sway(0, 0.0), 0.0);
        assert_eq!(card_sway(1, 0.0), 20.0);
        assert!((card_sway(2, 250.0) - 0.5f64.sin() * 20.0).abs() < 1e-12);
    }
}
