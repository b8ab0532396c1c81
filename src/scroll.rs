pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Latest vertical page offset plus the derived "past the header" flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    offset: f64,
    threshold: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::with_threshold(SCROLLED_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            offset: 0.0,
            threshold,
        }
    }

    /// Overwrites the offset. Called on every scroll event.
    pub fn record(&mut self, offset: f64) {
        self.offset = if offset.is_finite() { offset } else { 0.0 };
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_false_at_top_and_true_past_threshold() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.is_scrolled());

        tracker.record(51.0);
        assert!(tracker.is_scrolled());
        assert_eq!(tracker.offset(), 51.0);
    }

    #[test]
    fn flag_reverts_when_scrolling_back_up() {
        let mut tracker = ScrollTracker::default();
        tracker.record(51.0);
        tracker.record(0.0);

        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut tracker = ScrollTracker::default();
        tracker.record(50.0);

        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn non_finite_offset_reads_as_top() {
        let mut tracker = ScrollTracker::with_threshold(10.0);
        tracker.record(f64::NAN);

        assert_eq!(tracker.offset(), 0.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn flag_only_flips_when_crossing_the_threshold() {
        let mut tracker = ScrollTracker::default();
        let flags: Vec<bool> = [10.0, 40.0, 60.0, 300.0, 1200.0, 49.0]
            .into_iter()
            .map(|offset| {
                tracker.record(offset);
                tracker.is_scrolled()
            })
            .collect();

        assert_eq!(flags, [false, false, true, true, true, false]);
    }
}
