//! Browser bindings: element lookup, storage, listeners, and frame scheduling.
//!
//! Everything here talks to `web_sys` and only runs inside a page. The
//! decisions these helpers carry out live in the pure modules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Storage, Window};

use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::error::{FxError, FxResult};
use crate::parallax::{Extent, Viewport};
use crate::theme::{ThemeMarker, ThemeStore};
use crate::tilt::CardRect;

/// The window and document the controller is bound to.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> FxResult<Self> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Look up a required element by id.
    pub fn by_id(&self, id: &'static str) -> FxResult<Element> {
        self.document.get_element_by_id(id).ok_or(FxError::MissingElement(id))
    }

    /// First element matching `selector`, if any.
    pub fn query(&self, selector: &str) -> FxResult<Option<Element>> {
        self.document.query_selector(selector).map_err(|e| FxError::js(&e))
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> FxResult<Vec<Element>> {
        let list = self.document.query_selector_all(selector).map_err(|e| FxError::js(&e))?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect())
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.scroll_y(),
            width: number_or_zero(self.window.inner_width()),
            height: number_or_zero(self.window.inner_height()),
        }
    }

    /// System color-scheme preference. `false` if the query is unsupported.
    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }

    /// `localStorage`, or `None` when the browser denies access.
    #[must_use]
    pub fn local_storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", FxError::js(&err));
                None
            }
        }
    }

    /// Run `f` on the next animation frame.
    pub fn request_frame(&self, f: impl FnOnce() + 'static) -> FxResult<()> {
        let cb = Closure::once_into_js(f);
        self.window
            .request_animation_frame(cb.unchecked_ref())
            .map(|_handle| ())
            .map_err(|e| FxError::js(&e))
    }
}

fn number_or_zero(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or_default(),
        Err(_) => 0.0,
    }
}

// ── Theme seams ─────────────────────────────────────────────────

/// Theme slot in `localStorage`. Without storage, loads see nothing and
/// saves fail, which sends the theme controller to its in-memory fallback.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(storage: Option<Storage>) -> Self {
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme read failed: {}", FxError::js(&err));
                None
            }
        }
    }

    fn save(&mut self, value: &str) -> FxResult<()> {
        let storage = self.storage.as_ref().ok_or_else(|| FxError::Js("no localStorage".to_owned()))?;
        storage.set_item(THEME_STORAGE_KEY, value).map_err(|e| FxError::js(&e))
    }
}

/// The `data-theme` attribute on `<html>`.
pub struct RootMarker {
    root: Element,
}

impl RootMarker {
    pub fn new(page: &Page) -> FxResult<Self> {
        let root = page.document.document_element().ok_or(FxError::MissingElement("html"))?;
        Ok(Self { root })
    }
}

impl ThemeMarker for RootMarker {
    fn get(&self) -> Option<String> {
        self.root.get_attribute(THEME_ATTRIBUTE)
    }

    fn set(&mut self, value: &str) -> FxResult<()> {
        self.root.set_attribute(THEME_ATTRIBUTE, value).map_err(|e| FxError::js(&e))
    }
}

// ── Element writes ──────────────────────────────────────────────

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} not updated: {}", FxError::js(&err));
    }
}

/// Write an inline `transform`; an empty string clears it.
pub fn set_transform(el: &Element, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property("transform", value) {
        log::debug!("transform not updated: {}", FxError::js(&err));
    }
}

#[must_use]
pub fn card_rect(el: &Element) -> CardRect {
    let rect = el.get_bounding_client_rect();
    CardRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

#[must_use]
pub fn extent(el: &Element) -> Extent {
    let rect = el.get_bounding_client_rect();
    Extent { top: rect.top(), bottom: rect.bottom() }
}

/// `offsetTop` of an element, or `None` for non-HTML elements.
#[must_use]
pub fn offset_top(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|html| f64::from(html.offset_top()))
}

/// Print a `%c`-styled line to the browser console.
pub fn console_styled(text: &str, css: &str) {
    web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(css));
}

// ── Listeners ───────────────────────────────────────────────────

/// An attached event listener. Dropping it detaches the handler.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event` on `target`. Scroll-type listeners
    /// should pass `passive = true`.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> FxResult<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| FxError::js(&e))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("{} listener not removed: {}", self.event, FxError::js(&err));
        }
    }
}
