#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn card() -> CardRect {
    CardRect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 }
}

#[test]
fn center_has_no_tilt() {
    let tilt = tilt_for_pointer(card(), 200.0, 100.0, 20.0);
    assert!(approx_eq(tilt.rotate_x, 0.0));
    assert!(approx_eq(tilt.rotate_y, 0.0));
}

#[test]
fn top_left_corner_tilts_back_and_right() {
    let tilt = tilt_for_pointer(card(), 100.0, 50.0, 20.0);
    assert!(approx_eq(tilt.rotate_x, -2.5));
    assert!(approx_eq(tilt.rotate_y, 5.0));
}

#[test]
fn bottom_right_corner_mirrors_top_left() {
    let tilt = tilt_for_pointer(card(), 300.0, 150.0, 20.0);
    assert!(approx_eq(tilt.rotate_x, 2.5));
    assert!(approx_eq(tilt.rotate_y, -5.0));
}

#[test]
fn damping_scales_angles() {
    let soft = tilt_for_pointer(card(), 300.0, 150.0, 40.0);
    assert!(approx_eq(soft.rotate_x, 1.25));
    assert!(approx_eq(soft.rotate_y, -2.5));
}

#[test]
fn transform_string_layout() {
    let tilt = Tilt { rotate_x: 1.5, rotate_y: -2.0 };
    assert_eq!(
        tilt_transform(tilt, 1000.0, 4.0),
        "perspective(1000px) rotateX(1.5deg) rotateY(-2deg) translateY(-4px)"
    );
}
