// Scroll progress from container geometry.

use cubeblock_core::scroll::{progress, ScrollEdge, ScrollMetrics, ScrollOffset, ScrollOffsets, ScrollProgress};

fn metrics(top: f32) -> ScrollMetrics {
    // 500vh container in an 800px viewport
    ScrollMetrics {
        container_top: top,
        container_height: 4000.0,
        viewport_height: 800.0,
    }
}

#[test]
fn start_start_to_end_end() {
    let offsets = ScrollOffsets::default();
    assert_eq!(progress(metrics(0.0), offsets).get(), 0.0);
    assert_eq!(progress(metrics(-1600.0), offsets).get(), 0.5);
    assert_eq!(progress(metrics(-3200.0), offsets).get(), 1.0);
}

#[test]
fn clamps_before_and_after_the_container() {
    let offsets = ScrollOffsets::default();
    assert_eq!(progress(metrics(500.0), offsets), ScrollProgress::START);
    assert_eq!(progress(metrics(-9000.0), offsets), ScrollProgress::END);
}

#[test]
fn custom_offsets_shift_the_window() {
    let offsets = ScrollOffsets {
        start: ScrollOffset::new(ScrollEdge::Start, ScrollEdge::End),
        end: ScrollOffset::new(ScrollEdge::End, ScrollEdge::Start),
    };
    // enters at the viewport bottom, leaves past the viewport top
    assert_eq!(progress(metrics(800.0), offsets).get(), 0.0);
    assert_eq!(progress(metrics(-4000.0), offsets).get(), 1.0);
    assert!((progress(metrics(-1600.0), offsets).get() - 0.5).abs() < 1e-6);
}

#[test]
fn zero_travel_steps() {
    let offsets = ScrollOffsets::default();
    let m = ScrollMetrics {
        container_top: 0.0,
        container_height: 800.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress(m, offsets), ScrollProgress::END);
    let m = ScrollMetrics {
        container_top: 10.0,
        ..m
    };
    assert_eq!(progress(m, offsets), ScrollProgress::START);
}

#[test]
fn progress_is_clamped_and_nan_safe() {
    assert_eq!(ScrollProgress::new(-0.5).get(), 0.0);
    assert_eq!(ScrollProgress::new(1.5).get(), 1.0);
    assert_eq!(ScrollProgress::new(f32::NAN).get(), 0.0);
    assert_eq!(ScrollProgress::from(0.3).get(), 0.3);
}
