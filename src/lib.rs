//! Interactive effects for a single static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. On start it
//! binds a fixed set of element IDs and class names and installs theme
//! switching, nav bar state, smooth in-page scrolling, reveal-on-scroll,
//! active-section highlighting, card tilt, and parallax. Each effect is
//! independent; a missing element disables only its own effect.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Installs every effect and owns listeners |
//! | [`dom`] | `web_sys` bindings: lookup, storage, listeners, frames |
//! | [`theme`] | Theme resolution, persistence, and toggle |
//! | [`nav`] | Scrolled marker, mobile menu, active section |
//! | [`scroll`] | In-page link targets |
//! | [`reveal`] | Once-only reveal tracking |
//! | [`tilt`] | Pointer tilt math |
//! | [`parallax`] | Parallax table and displacement |
//! | [`frame`] | At-most-one-pending frame update |
//! | [`style`] | Injected toggle stylesheet |
//! | [`teardown`] | Page writes undone on stop or restart |
//! | [`config`] | Tunable thresholds |
//! | [`consts`] | DOM contract and default thresholds |
//! | [`error`] | Error type |

pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod frame;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod style;
pub mod teardown;
pub mod theme;
pub mod tilt;

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

use crate::config::FxConfig;
use crate::controller::Controller;
use crate::dom::Page;
use crate::error::FxResult;

thread_local! {
    static ACTIVE: RefCell<Option<Controller>> = const { RefCell::new(None) };
    static GREETED: Cell<bool> = const { Cell::new(false) };
}

fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        // Logger already installed by an earlier start; just retune it.
        log::set_max_level(level.to_level_filter());
    }
}

/// Print the console greeting once per page load.
fn greet_once(config: &FxConfig) {
    if GREETED.with(|greeted| greeted.replace(true)) {
        return;
    }
    for (text, css) in &config.greeting {
        dom::console_styled(text, css);
    }
}

fn boot(config: &FxConfig) -> FxResult<()> {
    init_logging(config.level());
    let page = Page::current()?;
    greet_once(config);
    // Drop any earlier controller first so its listeners detach.
    ACTIVE.with(|active| active.borrow_mut().take());
    let controller = Controller::start(&page, config);
    ACTIVE.with(|active| *active.borrow_mut() = Some(controller));
    Ok(())
}

/// Runs on module instantiation with the default config.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot(&FxConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Start (or restart) the page effects with a JSON config.
///
/// Unknown fields are rejected; missing fields take their defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = FxConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    boot(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Detach every listener and the reveal observer, remove the injected
/// stylesheet, and clear the nav, link, and transform writes.
#[wasm_bindgen]
pub fn stop() {
    ACTIVE.with(|active| active.borrow_mut().take());
}
