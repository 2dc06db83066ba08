//! Page controller: binds the fixed DOM contract and wires every effect.
//!
//! Each behavior installs independently. A missing element or a failed
//! browser call disables only that behavior and is logged at `warn`; the
//! rest of the page keeps working. All listeners, the reveal observer, and
//! their shared state are owned by [`Controller`]. Dropping it detaches
//! everything, removes the injected stylesheet, clears the classes and
//! transforms it wrote, and turns any still-pending frame into a no-op.
//! The `data-theme` marker and `visible` reveal classes are left in place.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::FxConfig;
use crate::consts::*;
use crate::dom::{self, Listener, LocalStore, Page, RootMarker};
use crate::error::{FxError, FxResult};
use crate::frame::{FrameGate, FrameSlot};
use crate::nav::{self, MobileMenu, SectionPos};
use crate::parallax::ParallaxTable;
use crate::reveal::{self, RevealSet};
use crate::scroll::fragment_target;
use crate::style::NAV_TOGGLE_CSS;
use crate::teardown::{Teardown, Undo};
use crate::theme::ThemeController;
use crate::tilt::{tilt_for_pointer, tilt_transform};

/// Live page effects. Constructed once per page; drop to tear down.
pub struct Controller {
    listeners: Vec<Listener>,
    reveal: Option<RevealWatcher>,
    teardown: Teardown<Element>,
    /// Cleared on drop; frame callbacks scheduled earlier check it.
    live: Rc<Cell<bool>>,
}

impl Controller {
    /// Bind and install every behavior against `page`.
    pub fn start(page: &Page, config: &FxConfig) -> Self {
        let mut ctl = Self {
            listeners: Vec::new(),
            reveal: None,
            teardown: Teardown::default(),
            live: Rc::new(Cell::new(true)),
        };
        let live = Rc::clone(&ctl.live);

        guarded("toggle styles", inject_styles(page, &mut ctl.teardown));
        ctl.keep("theme", install_theme(page));
        let nav = install_nav_scrolled(page, config.scrolled_threshold_px, &mut ctl.teardown);
        ctl.keep("nav scrolled", nav);
        let menu = install_mobile_menu(page, &mut ctl.teardown);
        ctl.keep("mobile menu", menu);
        ctl.keep("smooth scroll", install_smooth_scroll(page));
        ctl.reveal = guarded("reveal", install_reveal(page, config));
        let active = install_active_link(page, config.active_section_offset_px, &mut ctl.teardown);
        ctl.keep("active link", active);
        let tilt = install_tilt(page, config, &live, &mut ctl.teardown);
        ctl.keep("tilt", tilt);
        let parallax = install_parallax(page, config.parallax_min_width_px, &live, &mut ctl.teardown);
        ctl.keep("parallax", parallax);

        log::info!(
            "page effects ready: {} listeners, reveal {}",
            ctl.listeners.len(),
            if ctl.reveal.is_some() { "on" } else { "off" }
        );
        ctl
    }

    fn keep(&mut self, behavior: &str, result: FxResult<Vec<Listener>>) {
        if let Some(mut listeners) = guarded(behavior, result) {
            log::debug!("{behavior}: {} listeners", listeners.len());
            self.listeners.append(&mut listeners);
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.live.set(false);
        self.teardown.run(|el, undo| match undo {
            Undo::Class(class) => dom::set_class(el, class, false),
            Undo::Transform => dom::set_transform(el, ""),
            Undo::Remove => el.remove(),
        });
        log::debug!("page effects torn down");
    }
}

fn guarded<T>(behavior: &str, result: FxResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{behavior} disabled: {err}");
            None
        }
    }
}

fn window_target(page: &Page) -> EventTarget {
    let target: &EventTarget = page.window.as_ref();
    target.clone()
}

// ── Styles ──────────────────────────────────────────────────────

fn inject_styles(page: &Page, teardown: &mut Teardown<Element>) -> FxResult<()> {
    let head = page.document.head().ok_or(FxError::MissingElement("head"))?;
    let style = page.document.create_element("style").map_err(|e| FxError::js(&e))?;
    style.set_text_content(Some(NAV_TOGGLE_CSS));
    head.append_child(&style).map_err(|e| FxError::js(&e))?;
    teardown.track(style, Undo::Remove);
    Ok(())
}

// ── Theme ───────────────────────────────────────────────────────

fn install_theme(page: &Page) -> FxResult<Vec<Listener>> {
    let store = LocalStore::new(page.local_storage());
    let mut theme = ThemeController::new(store, RootMarker::new(page)?, page.prefers_dark());
    let initial = theme.init()?;
    log::debug!("initial theme {}", initial.as_str());
    if theme.is_degraded() {
        log::info!("theme changes will not persist past this session");
    }

    let toggle = page.by_id(ID_THEME_TOGGLE)?;
    let theme = Rc::new(RefCell::new(theme));
    let listener = Listener::attach(&toggle, "click", false, move |_ev: Event| {
        if let Err(err) = theme.borrow_mut().toggle() {
            log::warn!("theme toggle failed: {err}");
        }
    })?;
    Ok(vec![listener])
}

// ── Navigation ──────────────────────────────────────────────────

fn install_nav_scrolled(page: &Page, threshold: f64, teardown: &mut Teardown<Element>) -> FxResult<Vec<Listener>> {
    let nav_el = page.by_id(ID_NAV)?;
    teardown.track(nav_el.clone(), Undo::Class(CLASS_SCROLLED));
    let sync = {
        let page = page.clone();
        move || dom::set_class(&nav_el, CLASS_SCROLLED, nav::is_scrolled(page.scroll_y(), threshold))
    };
    sync();
    let listener = Listener::attach(&window_target(page), "scroll", true, move |_ev: Event| sync())?;
    Ok(vec![listener])
}

fn install_mobile_menu(page: &Page, teardown: &mut Teardown<Element>) -> FxResult<Vec<Listener>> {
    let toggle = page.by_id(ID_NAV_TOGGLE)?;
    let menu = page.by_id(ID_MOBILE_MENU)?;
    let state = Rc::new(Cell::new(MobileMenu::new(menu.class_list().contains(CLASS_ACTIVE))));
    teardown.track(menu.clone(), Undo::Class(CLASS_ACTIVE));
    teardown.track(toggle.clone(), Undo::Class(CLASS_ACTIVE));

    let apply = {
        let toggle = toggle.clone();
        move |open: bool| {
            dom::set_class(&menu, CLASS_ACTIVE, open);
            dom::set_class(&toggle, CLASS_ACTIVE, open);
        }
    };

    let mut listeners = Vec::new();
    {
        let state = Rc::clone(&state);
        let apply = apply.clone();
        listeners.push(Listener::attach(&toggle, "click", false, move |_ev: Event| {
            let mut menu = state.get();
            let open = menu.toggle();
            state.set(menu);
            apply(open);
        })?);
    }
    for link in page.query_all(SEL_MOBILE_LINKS)? {
        let state = Rc::clone(&state);
        let apply = apply.clone();
        listeners.push(Listener::attach(&link, "click", false, move |_ev: Event| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            apply(false);
        })?);
    }
    Ok(listeners)
}

// ── Smooth scroll ───────────────────────────────────────────────

fn install_smooth_scroll(page: &Page) -> FxResult<Vec<Listener>> {
    let mut listeners = Vec::new();
    for anchor in page.query_all(SEL_ANCHOR_LINKS)? {
        let document = page.document.clone();
        let link = anchor.clone();
        listeners.push(Listener::attach(&anchor, "click", false, move |ev: Event| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?);
    }
    Ok(listeners)
}

// ── Reveal ──────────────────────────────────────────────────────

/// The single intersection observer behind reveal-on-scroll.
struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn install_reveal(page: &Page, config: &FxConfig) -> FxResult<RevealWatcher> {
    let elements = Rc::new(page.query_all(SEL_REVEAL)?);
    let states = Rc::new(RefCell::new(RevealSet::new(elements.len())));

    let callback = {
        let elements = Rc::clone(&elements);
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| *el == target) else {
                    continue;
                };
                if states.borrow_mut().on_intersect(index, entry.is_intersecting()) {
                    dom::set_class(&target, CLASS_VISIBLE, true);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&reveal::root_margin(config.reveal_bottom_margin_px));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| FxError::js(&e))?;
    for el in elements.iter() {
        observer.observe(el);
    }
    log::debug!("reveal: observing {} elements", elements.len());
    Ok(RevealWatcher { observer, _callback: callback })
}

// ── Active section ──────────────────────────────────────────────

fn install_active_link(page: &Page, offset: f64, teardown: &mut Teardown<Element>) -> FxResult<Vec<Listener>> {
    let sections = page.query_all(SEL_SECTIONS)?;
    let links = page.query_all(SEL_NAV_LINKS)?;
    for link in &links {
        teardown.track(link.clone(), Undo::Class(CLASS_ACTIVE));
    }
    let scroll_page = page.clone();

    let listener = Listener::attach(&window_target(page), "scroll", true, move |_ev: Event| {
        let tops: Vec<(String, f64)> = sections
            .iter()
            .filter_map(|section| Some((section.id(), dom::offset_top(section)?)))
            .collect();
        let positions: Vec<SectionPos<'_>> =
            tops.iter().map(|(id, top)| SectionPos { id: id.as_str(), top: *top }).collect();
        let current = nav::current_section(&positions, scroll_page.scroll_y(), offset);
        let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
        let hrefs: Vec<Option<&str>> = hrefs.iter().map(Option::as_deref).collect();
        for (link, active) in links.iter().zip(nav::active_flags(&hrefs, current)) {
            dom::set_class(link, CLASS_ACTIVE, active);
        }
    })?;
    Ok(vec![listener])
}

// ── Tilt ────────────────────────────────────────────────────────

fn install_tilt(
    page: &Page,
    config: &FxConfig,
    live: &Rc<Cell<bool>>,
    teardown: &mut Teardown<Element>,
) -> FxResult<Vec<Listener>> {
    let mut listeners = Vec::new();
    for card in page.query_all(SEL_TILT_CARDS)? {
        teardown.track(card.clone(), Undo::Transform);
        let slot: Rc<RefCell<FrameSlot<String>>> = Rc::new(RefCell::new(FrameSlot::default()));

        let on_move = {
            let card = card.clone();
            let slot = Rc::clone(&slot);
            let page = page.clone();
            let live = Rc::clone(live);
            let (damping, perspective, lift) = (config.tilt_damping, config.tilt_perspective_px, config.tilt_lift_px);
            move |ev: Event| {
                let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let tilt = tilt_for_pointer(
                    dom::card_rect(&card),
                    f64::from(mouse.client_x()),
                    f64::from(mouse.client_y()),
                    damping,
                );
                let needs_frame = slot.borrow_mut().put(tilt_transform(tilt, perspective, lift));
                if needs_frame {
                    schedule_tilt(&page, &card, &slot, &live);
                }
            }
        };
        listeners.push(Listener::attach(&card, "mousemove", true, on_move)?);

        let leave_card = card.clone();
        listeners.push(Listener::attach(&card, "mouseleave", true, move |_ev: Event| {
            slot.borrow_mut().cancel();
            dom::set_transform(&leave_card, "");
        })?);
    }
    Ok(listeners)
}

fn schedule_tilt(page: &Page, card: &Element, slot: &Rc<RefCell<FrameSlot<String>>>, live: &Rc<Cell<bool>>) {
    let frame_card = card.clone();
    let frame_slot = Rc::clone(slot);
    let frame_live = Rc::clone(live);
    let scheduled = page.request_frame(move || {
        let pending = frame_slot.borrow_mut().take();
        if let (Some(transform), true) = (pending, frame_live.get()) {
            dom::set_transform(&frame_card, &transform);
        }
    });
    if let Err(err) = scheduled {
        log::debug!("tilt frame not scheduled, applying now: {err}");
        let pending = slot.borrow_mut().take();
        if let Some(transform) = pending {
            dom::set_transform(card, &transform);
        }
    }
}

// ── Parallax ────────────────────────────────────────────────────

fn is_excluded(el: &Element) -> bool {
    let classes = el.class_list();
    PARALLAX_EXCLUDED_CLASSES.iter().any(|class| classes.contains(class))
}

fn parallax_table(page: &Page, min_width: f64, teardown: &mut Teardown<Element>) -> FxResult<ParallaxTable<Element>> {
    let mut table = ParallaxTable::new(min_width);
    let mut add = |el: Element, speed: f64| {
        let excluded = is_excluded(&el);
        if !excluded {
            teardown.track(el.clone(), Undo::Transform);
        }
        table.push(el, speed, excluded);
    };
    for (selector, speed) in PARALLAX_FIXED {
        match page.query(selector)? {
            Some(el) => add(el, speed),
            None => log::debug!("parallax target {selector} not on page"),
        }
    }
    for title in page.query_all(SEL_SECTION_TITLES)? {
        add(title, PARALLAX_SECTION_TITLE_SPEED);
    }
    Ok(table)
}

fn apply_parallax(page: &Page, table: &ParallaxTable<Element>) {
    for (el, transform) in table.updates(page.viewport(), dom::extent) {
        dom::set_transform(el, &transform);
    }
}

fn install_parallax(
    page: &Page,
    min_width: f64,
    live: &Rc<Cell<bool>>,
    teardown: &mut Teardown<Element>,
) -> FxResult<Vec<Listener>> {
    let table = parallax_table(page, min_width, teardown)?;
    if table.is_empty() {
        log::debug!("parallax: no targets on page");
        return Ok(Vec::new());
    }
    log::debug!("parallax: {} targets", table.len());
    let table = Rc::new(table);
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let scroll_page = page.clone();
    let live = Rc::clone(live);

    let listener = Listener::attach(&window_target(page), "scroll", true, move |_ev: Event| {
        if !gate.borrow_mut().request() {
            return;
        }
        let frame_page = scroll_page.clone();
        let frame_table = Rc::clone(&table);
        let frame_gate = Rc::clone(&gate);
        let frame_live = Rc::clone(&live);
        let scheduled = scroll_page.request_frame(move || {
            if frame_live.get() {
                apply_parallax(&frame_page, &frame_table);
            }
            frame_gate.borrow_mut().complete();
        });
        if let Err(err) = scheduled {
            log::debug!("parallax frame not scheduled: {err}");
            gate.borrow_mut().complete();
        }
    })?;
    Ok(vec![listener])
}
