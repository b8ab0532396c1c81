use super::browser::{page_offset, viewport_height};
use crate::autoscroll::{AutoScrollCursor, AutoScroller, ScrollGeometry, TICK_INTERVAL_MS};
use crate::parallax::{scroll_progress, will_change, ParallaxRange};
use crate::pointer::PointerPosition;
use crate::scroll::ScrollTracker;
use crate::visibility::{
    intersection_ratio, IntersectionSample, ObserverOptions, VisibilityTrigger,
};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use js_sys::Reflect;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

fn on_window(
    event_type: &'static str,
    callback: impl FnMut(&Event) + 'static,
) -> Option<EventListener> {
    window().map(|win| EventListener::new(&win, event_type, callback))
}

/// Page scroll offset and the past-threshold flag, updated on every scroll event.
#[hook]
pub fn use_scroll_tracker() -> ScrollTracker {
    let tracker = use_state_eq(ScrollTracker::default);

    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            let mut current = *tracker;
            current.record(page_offset());
            tracker.set(current);

            let listener = on_window("scroll", move |_| {
                current.record(page_offset());
                tracker.set(current);
            });
            move || drop(listener)
        });
    }

    *tracker
}

/// Only the past-threshold flag, so consumers re-render when it flips rather
/// than on every scroll event.
#[hook]
pub fn use_is_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let mut tracker = ScrollTracker::default();
            tracker.record(page_offset());
            scrolled.set(tracker.is_scrolled());

            let listener = on_window("scroll", move |_| {
                tracker.record(page_offset());
                scrolled.set(tracker.is_scrolled());
            });
            move || drop(listener)
        });
    }

    *scrolled
}

/// Keeps the intersection machinery alive for as long as the element is watched.
enum ViewportWatch {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    },
    Polling(EventListener),
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        if let Self::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}

fn watch_with_observer(
    element: &Element,
    options: ObserverOptions,
    on_change: Callback<bool>,
) -> Option<ViewportWatch> {
    let mut trigger = VisibilityTrigger::new(options);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                trigger.observe(IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
                on_change.emit(trigger.in_view());
            }
            if trigger.is_settled() {
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(ViewportWatch::Observer {
        observer,
        _callback: callback,
    })
}

fn watch_with_polling(
    element: Element,
    options: ObserverOptions,
    on_change: Callback<bool>,
) -> Option<ViewportWatch> {
    let mut trigger = VisibilityTrigger::new(options);
    let mut sample = move || {
        if trigger.is_settled() {
            return;
        }
        let rect = element.get_bounding_client_rect();
        let ratio = intersection_ratio(rect.top(), rect.height(), viewport_height());
        trigger.observe(IntersectionSample::visible(ratio));
        on_change.emit(trigger.in_view());
    };

    sample();
    on_window("scroll", move |_| sample()).map(ViewportWatch::Polling)
}

/// `true` while the element referenced by `node` satisfies `options`; with
/// `trigger_once` it latches after the first entrance. Stays `false` if the
/// node is never mounted.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserverOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with(node, move |node| {
            let on_change = Callback::from(move |visible: bool| in_view.set(visible));
            let watch = node.cast::<Element>().and_then(|element| {
                watch_with_observer(&element, options, on_change.clone())
                    .or_else(|| watch_with_polling(element, options, on_change))
            });
            move || drop(watch)
        });
    }

    *in_view
}

fn scroll_top_key() -> JsValue {
    JsValue::from_str("scrollTop")
}

/// Fractional `scrollTop`; `Element::scroll_top` truncates to whole pixels.
fn read_scroll_top(element: &Element) -> f64 {
    Reflect::get(element, &scroll_top_key())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(element.scroll_top()))
}

fn write_scroll_top(element: &Element, offset: f64) {
    if Reflect::set(element, &scroll_top_key(), &JsValue::from_f64(offset)).is_err() {
        element.set_scroll_top(offset.round() as i32);
    }
}

/// Scrolls the container one step per tick, wrapping to the top at the bottom.
/// The interval is cancelled when the component unmounts.
#[hook]
pub fn use_auto_scroll(container: NodeRef) {
    use_effect_with(container, |container| {
        let container = container.clone();
        let scroller = AutoScroller::default();
        let mut cursor = AutoScrollCursor::default();

        let interval = Interval::new(TICK_INTERVAL_MS, move || {
            let Some(element) = container.cast::<Element>() else {
                return;
            };
            let geometry = ScrollGeometry {
                scroll_top: read_scroll_top(&element),
                scroll_height: f64::from(element.scroll_height()),
                client_height: f64::from(element.client_height()),
            };
            write_scroll_top(&element, cursor.tick(&scroller, geometry));
        });
        tracing::debug!(interval_ms = TICK_INTERVAL_MS, "gallery auto-scroll started");

        move || {
            drop(interval);
            tracing::debug!("gallery auto-scroll stopped");
        }
    });
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub translate_y: String,
    pub will_change: &'static str,
}

impl ParallaxLayer {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({}); will-change: {};",
            self.translate_y, self.will_change
        )
    }
}

/// Translation for a layer inside `container`, recomputed on every scroll event.
#[hook]
pub fn use_parallax(container: NodeRef, range: ParallaxRange) -> ParallaxLayer {
    let layer = use_state_eq(|| ParallaxLayer {
        translate_y: range.translate_y(0.0),
        will_change: "auto",
    });

    {
        let layer = layer.clone();
        use_effect_with(container, move |container| {
            let container = container.clone();
            let update = move || {
                let Some(element) = container.cast::<Element>() else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                let viewport = viewport_height();
                layer.set(ParallaxLayer {
                    translate_y: range.translate_y(scroll_progress(
                        rect.top(),
                        rect.height(),
                        viewport,
                    )),
                    will_change: will_change(rect.top(), rect.height(), viewport),
                });
            };

            update();
            let listener = on_window("scroll", move |_| update());
            move || drop(listener)
        });
    }

    (*layer).clone()
}

#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state_eq(PointerPosition::default);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = on_window("mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    position.set(PointerPosition {
                        x: f64::from(event.client_x()),
                        y: f64::from(event.client_y()),
                    });
                }
            });
            move || drop(listener)
        });
    }

    *position
}
