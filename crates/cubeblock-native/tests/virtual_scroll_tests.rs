// Host-side tests for the preview's virtual scroll page.
// The preview is a binary, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod virtual_scroll {
    include!("../src/virtual_scroll.rs");
}

use virtual_scroll::VirtualScroll;

#[test]
fn page_is_five_screens_tall() {
    let s = VirtualScroll::new(800.0, 5.0);
    assert_eq!(s.container_height(), 4000.0);
    assert_eq!(s.max_scroll(), 3200.0);
    assert_eq!(s.progress().get(), 0.0);
}

#[test]
fn scrolling_maps_to_progress() {
    let mut s = VirtualScroll::new(800.0, 5.0);
    s.scroll_by(1600.0);
    assert_eq!(s.progress().get(), 0.5);
    s.scroll_to(3200.0);
    assert_eq!(s.progress().get(), 1.0);
}

#[test]
fn scroll_is_clamped_to_the_page() {
    let mut s = VirtualScroll::new(800.0, 5.0);
    s.scroll_by(-100.0);
    assert_eq!(s.scroll_y(), 0.0);
    s.scroll_by(1.0e9);
    assert_eq!(s.scroll_y(), s.max_scroll());
    s.scroll_by(f32::NAN);
    assert_eq!(s.scroll_y(), s.max_scroll());
}

#[test]
fn resizing_keeps_progress() {
    let mut s = VirtualScroll::new(800.0, 5.0);
    s.scroll_by(800.0);
    let before = s.progress().get();
    s.set_viewport_height(600.0);
    assert!((s.progress().get() - before).abs() < 1e-6);
    assert_eq!(s.container_height(), 3000.0);
}

#[test]
fn single_screen_page_is_at_the_end() {
    let s = VirtualScroll::new(800.0, 1.0);
    assert_eq!(s.max_scroll(), 0.0);
    // no travel: progress steps straight to the end
    assert_eq!(s.progress().get(), 1.0);
}
