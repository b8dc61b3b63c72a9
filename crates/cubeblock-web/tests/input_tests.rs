// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn corners_map_to_ndc_extremes() {
    // canvas at (10, 20), 200x100 CSS px
    assert_eq!(to_ndc(10.0, 20.0, 10.0, 20.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(to_ndc(210.0, 120.0, 10.0, 20.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(to_ndc(110.0, 70.0, 10.0, 20.0, 200.0, 100.0), Vec2::ZERO);
}

#[test]
fn outside_points_are_clamped() {
    assert_eq!(to_ndc(-50.0, 500.0, 0.0, 0.0, 100.0, 100.0), Vec2::new(-1.0, -1.0));
}

#[test]
fn empty_canvas_maps_to_center() {
    assert_eq!(to_ndc(5.0, 5.0, 0.0, 0.0, 0.0, 100.0), Vec2::ZERO);
    assert_eq!(MouseState::default().ndc, Vec2::ZERO);
}
