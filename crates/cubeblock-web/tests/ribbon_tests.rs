// Host-side tests for the hero ribbon geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod dom {
    include!("../src/dom.rs");
}
mod ribbons {
    include!("../src/ribbons.rs");
}

use glam::Vec2;
use ribbons::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn ribbon_starts_right_of_center() {
    let points = ribbon_points(0, 0.0, 800.0, 600.0);
    assert_eq!(points.len(), RIBBON_SEGMENTS + 1);
    assert_eq!(points[0], Vec2::new(600.0, 300.0));
    // two full turns bring it back to the start
    assert!(close(points[RIBBON_SEGMENTS], points[0]), "{:?}", points[RIBBON_SEGMENTS]);
}

#[test]
fn outer_ribbons_are_wider() {
    let (w, h) = (1200.0, 900.0);
    let center = Vec2::new(w / 2.0, h / 2.0);
    for (i, radius, vertical) in [(0, 200.0, 150.0), (1, 250.0, 180.0), (2, 300.0, 210.0)] {
        let points = ribbon_points(i, 123.0, w, h);
        let max_x = points.iter().map(|p| (p.x - center.x).abs()).fold(0.0, f32::max);
        let max_y = points.iter().map(|p| (p.y - center.y).abs()).fold(0.0, f32::max);
        assert!(max_x <= radius + 1e-3 && max_x > radius * 0.9, "ribbon {i} x {max_x}");
        assert!(max_y <= vertical + 1e-3, "ribbon {i} y {max_y}");
    }
}

#[test]
fn ribbons_move_over_time() {
    let a = ribbon_points(1, 0.0, 800.0, 600.0);
    let b = ribbon_points(1, ribbon_time(1.0), 800.0, 600.0);
    assert!(!close(a[0], b[0]));
    // frames are a pure function of time
    assert_eq!(b, ribbon_points(1, ribbon_time(1.0), 800.0, 600.0));
}

#[test]
fn time_advances_three_quarters_per_frame() {
    assert_eq!(ribbon_time(0.0), 0.0);
    assert_eq!(ribbon_time(1.0), 45.0);
    assert!((ribbon_time(1.0 / 60.0) - 0.75).abs() < 1e-5);
}

#[test]
fn curve_uses_midpoints_between_samples() {
    let points = ribbon_points(0, 10.0, 800.0, 600.0);
    let segments: Vec<_> = ribbon_curve(&points).collect();
    assert_eq!(segments.len(), RIBBON_SEGMENTS - 2);
    let (control, end) = segments[0];
    assert_eq!(control, points[2]);
    assert!(close(end, (points[2] + points[3]) * 0.5));
    let (_, last_end) = segments[segments.len() - 1];
    assert!(close(last_end, (points[99] + points[100]) * 0.5));
}

#[test]
fn short_paths_have_no_curve() {
    assert_eq!(ribbon_curve(&[]).count(), 0);
    assert_eq!(ribbon_curve(&[Vec2::ZERO, Vec2::ONE, Vec2::X]).count(), 0);
    assert_eq!(ribbon_curve(&[Vec2::ZERO; 4]).count(), 1);
}

#[test]
fn later_ribbons_are_fainter() {
    let first = ribbon_stops(0);
    let third = ribbon_stops(2);
    assert_eq!(first.map(|s| s.2), [0.25, 0.20, 0.18]);
    for k in 0..3 {
        assert_eq!(first[k].0, third[k].0);
        assert!(third[k].2 < first[k].2);
        assert!(third[k].2 > 0.0);
    }
    assert!(ribbon_stops(10).iter().all(|s| s.2 == 0.0));
}
