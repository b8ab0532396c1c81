pub const TICK_INTERVAL_MS: u32 = 30;
pub const STEP_PX: f64 = 1.0;
const BOTTOM_EPSILON_PX: f64 = 1.0;
const RESYNC_TOLERANCE_PX: f64 = 1.0;

/// Scroll metrics of a container, as read from the DOM before a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollGeometry {
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - BOTTOM_EPSILON_PX
    }
}

/// Advances a container by a fixed step per tick and jumps back to the top
/// once the bottom is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroller {
    step: f64,
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self { step: STEP_PX }
    }
}

impl AutoScroller {
    pub fn with_step(step: f64) -> Self {
        Self { step }
    }

    /// Next `scroll_top` for the container. The reset to zero is an instant jump.
    pub fn next_offset(&self, geometry: ScrollGeometry) -> f64 {
        if geometry.at_bottom() {
            0.0
        } else {
            geometry.scroll_top + self.step
        }
    }
}

/// Fractional position carried between ticks. Browsers may round or snap
/// `scrollTop` to device pixels, so a DOM reading replaces the tracked value
/// only when it is more than a pixel away (the user or layout moved it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoScrollCursor {
    position: Option<f64>,
}

impl AutoScrollCursor {
    /// Offset to write for this tick, given the container as read from the DOM.
    pub fn tick(&mut self, scroller: &AutoScroller, observed: ScrollGeometry) -> f64 {
        let scroll_top = match self.position {
            Some(position) if (position - observed.scroll_top).abs() <= RESYNC_TOLERANCE_PX => {
                position
            }
            _ => observed.scroll_top,
        };
        let next = scroller.next_offset(ScrollGeometry {
            scroll_top,
            ..observed
        });
        self.position = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scroller: AutoScroller, ticks: usize, mut geometry: ScrollGeometry) -> f64 {
        for _ in 0..ticks {
            geometry.scroll_top = scroller.next_offset(geometry);
        }
        geometry.scroll_top
    }

    fn container() -> ScrollGeometry {
        ScrollGeometry {
            scroll_top: 0.0,
            scroll_height: 300.0,
            client_height: 100.0,
        }
    }

    #[test]
    fn advances_one_pixel_per_tick() {
        assert_eq!(run(AutoScroller::default(), 199, container()), 199.0);
    }

    #[test]
    fn resets_to_top_at_the_bottom_boundary() {
        let scroller = AutoScroller::default();
        let at_199 = ScrollGeometry {
            scroll_top: 199.0,
            ..container()
        };

        assert!(at_199.at_bottom());
        assert_eq!(scroller.next_offset(at_199), 0.0);
        assert_eq!(run(scroller, 200, container()), 0.0);
        assert_eq!(run(scroller, 201, container()), 1.0);
    }

    #[test]
    fn container_without_overflow_stays_at_top() {
        let geometry = ScrollGeometry {
            scroll_top: 0.0,
            scroll_height: 100.0,
            client_height: 100.0,
        };

        assert_eq!(run(AutoScroller::default(), 5, geometry), 0.0);
    }

    #[test]
    fn custom_step_is_applied() {
        assert_eq!(run(AutoScroller::with_step(4.0), 10, container()), 40.0);
    }

    /// Scroll container that stores offsets snapped to device pixels.
    struct SnappingContainer {
        device_pixel_ratio: f64,
        scroll_top: f64,
    }

    impl SnappingContainer {
        fn write(&mut self, offset: f64) {
            self.scroll_top = (offset * self.device_pixel_ratio).round() / self.device_pixel_ratio;
        }

        fn geometry(&self, read: impl Fn(f64) -> f64) -> ScrollGeometry {
            ScrollGeometry {
                scroll_top: read(self.scroll_top),
                ..container()
            }
        }
    }

    fn drive(ticks: usize, read: impl Fn(f64) -> f64) -> SnappingContainer {
        let scroller = AutoScroller::default();
        let mut cursor = AutoScrollCursor::default();
        let mut dom = SnappingContainer {
            device_pixel_ratio: 1.25,
            scroll_top: 0.0,
        };
        for _ in 0..ticks {
            let next = cursor.tick(&scroller, dom.geometry(&read));
            dom.write(next);
        }
        dom
    }

    #[test]
    fn keeps_advancing_when_the_container_snaps_to_device_pixels() {
        assert_eq!(drive(20, |top| top).scroll_top, 20.0);
    }

    #[test]
    fn keeps_advancing_when_offsets_are_read_back_as_integers() {
        let dom = drive(20, f64::trunc);
        assert_eq!(dom.scroll_top, 20.0);
    }

    #[test]
    fn snapping_container_still_wraps_at_the_bottom() {
        assert_eq!(drive(200, |top| top).scroll_top, 0.0);
        assert_eq!(drive(203, |top| top).scroll_top, 3.2);
    }

    #[test]
    fn cursor_follows_an_external_scroll() {
        let scroller = AutoScroller::default();
        let mut cursor = AutoScrollCursor::default();
        assert_eq!(cursor.tick(&scroller, container()), 1.0);

        let moved = ScrollGeometry {
            scroll_top: 150.0,
            ..container()
        };
        assert_eq!(cursor.tick(&scroller, moved), 151.0);
    }
}
