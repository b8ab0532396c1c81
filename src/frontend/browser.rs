use crate::navigation::AnchorScroller;
use crate::theme::{Theme, ThemeStorage, ThemeSwitch, ThemeTarget};
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions, Storage};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`, or nothing when the browser denies access.
pub struct BrowserStorage(Option<Storage>);

impl BrowserStorage {
    pub fn open() -> Self {
        Self(local_storage())
    }
}

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.0.as_ref() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// The `<html>` element, marked with a `light` or `dark` class.
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

fn start_view_transition(document: &Document) -> Option<Function> {
    Reflect::get(document, &JsValue::from_str("startViewTransition"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// The `<html>` element again, but user toggles go through
/// `document.startViewTransition` when the browser has it and the user has
/// not asked for reduced motion.
pub struct TransitionRoot;

impl ThemeTarget for TransitionRoot {
    fn apply(&self, theme: Theme) {
        let document = window().and_then(|w| w.document());
        let transition = document.as_ref().and_then(start_view_transition);

        let switch = ThemeSwitch::choose(prefers_reduced_motion(), transition.is_some());
        let (ThemeSwitch::ViewTransition, Some(document), Some(transition)) =
            (switch, document, transition)
        else {
            DocumentRoot.apply(theme);
            return;
        };

        let update = Closure::once_into_js(move || DocumentRoot.apply(theme));
        if transition.call1(&document, &update).is_err() {
            tracing::debug!(theme = theme.as_str(), "view transition rejected");
            DocumentRoot.apply(theme);
        }
    }
}

/// Smooth-scrolls to elements of the live document.
pub struct PageAnchors;

impl AnchorScroller for PageAnchors {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn page_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
