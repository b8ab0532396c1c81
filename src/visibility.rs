//! Viewport-entry triggers.
//!
//! [`VisibilityTrigger`] is the per-element state machine fed by intersection
//! samples (from `IntersectionObserver` in the browser, or from
//! [`intersection_ratio`] when polling geometry). [`SectionVisibility`] is the
//! page-wide record of which sections have been revealed.

use crate::navigation::Section;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub trigger_once: bool,
    /// Fraction of the element's area that must be visible, in `[0, 1]`.
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            threshold: 0.1,
        }
    }
}

impl ObserverOptions {
    pub fn once(threshold: f64) -> Self {
        Self {
            trigger_once: true,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self {
            trigger_once: false,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }
}

/// One observation of an element against the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    options: ObserverOptions,
    in_view: bool,
    triggered: usize,
}

impl VisibilityTrigger {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            in_view: false,
            triggered: 0,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Number of false→true transitions seen so far.
    pub fn trigger_count(&self) -> usize {
        self.triggered
    }

    /// Once a trigger-once observer has fired there is nothing left to watch.
    pub fn is_settled(&self) -> bool {
        self.options.trigger_once && self.triggered > 0
    }

    /// Feeds one sample. Returns `true` when this sample is an entrance,
    /// i.e. the moment to fire the callback.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.is_settled() {
            return false;
        }

        let visible = sample.is_intersecting && sample.ratio >= self.options.threshold;
        let entered = visible && !self.in_view;
        self.in_view = visible;
        if entered {
            self.triggered += 1;
        }
        entered
    }
}

/// Fraction of an element's height inside a viewport of `viewport_height`,
/// from the element's bounding-rect `top` and `height`.
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }

    let visible_top = top.max(0.0);
    let visible_bottom = (top + height).min(viewport_height);
    ((visible_bottom - visible_top).max(0.0) / height).clamp(0.0, 1.0)
}

/// Sections revealed so far. Reveals are one-way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    revealed: BTreeSet<Section>,
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Returns `true` if the section was not visible before.
    pub fn reveal(&mut self, section: Section) -> bool {
        let newly = self.revealed.insert(section);
        if newly {
            tracing::debug!(section = section.id(), "section revealed");
        }
        newly
    }

    pub fn revealed(&self) -> impl Iterator<Item = Section> + '_ {
        self.revealed.iter().copied()
    }
}
