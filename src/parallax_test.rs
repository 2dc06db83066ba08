#![allow(clippy::float_cmp)]

use super::*;

fn desktop(scroll_y: f64) -> Viewport {
    Viewport { scroll_y, width: 1280.0, height: 800.0 }
}

fn ident(e: &Extent) -> Extent {
    *e
}

#[test]
fn disabled_at_and_below_min_width() {
    assert!(!parallax_enabled(500.0, 768.0));
    assert!(!parallax_enabled(768.0, 768.0));
    assert!(parallax_enabled(769.0, 768.0));
}

#[test]
fn mobile_width_never_applies_regardless_of_scroll() {
    let mut table = ParallaxTable::new(768.0);
    table.push(Extent { top: 100.0, bottom: 300.0 }, 0.2, false);
    for scroll_y in [0.0, 250.0, 5000.0] {
        let viewport = Viewport { scroll_y, width: 500.0, height: 900.0 };
        assert!(table.updates(viewport, ident).is_empty());
    }
}

#[test]
fn displacement_is_zero_when_element_top_at_mid_viewport() {
    assert_eq!(displacement(1000.0, 1400.0, 800.0, 0.4), 0.0);
}

#[test]
fn displacement_moves_against_scroll() {
    assert_eq!(displacement(0.0, 0.0, 800.0, 0.2), -80.0);
    assert_eq!(displacement(0.0, 800.0, 800.0, 0.5), 200.0);
}

#[test]
fn updates_skip_offscreen_targets() {
    let mut table = ParallaxTable::new(768.0);
    table.push(Extent { top: 900.0, bottom: 1200.0 }, 0.2, false);
    table.push(Extent { top: -300.0, bottom: 0.0 }, 0.2, false);
    table.push(Extent { top: 0.0, bottom: 200.0 }, 0.2, false);
    let updates = table.updates(desktop(0.0), ident);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].1, "translate3d(0, -80px, 0)");
}

#[test]
fn updates_skip_excluded_cards() {
    let mut table = ParallaxTable::new(768.0);
    table.push(Extent { top: 0.0, bottom: 200.0 }, 0.2, true);
    assert_eq!(table.len(), 1);
    assert!(table.updates(desktop(0.0), ident).is_empty());
}

#[test]
fn updates_use_page_offset_of_element() {
    let mut table = ParallaxTable::new(768.0);
    // Client top 100 at scroll 500 puts the page top at 600.
    table.push(Extent { top: 100.0, bottom: 400.0 }, 0.1, false);
    let updates = table.updates(desktop(500.0), ident);
    assert_eq!(updates[0].1, "translate3d(0, -30px, 0)");
}
