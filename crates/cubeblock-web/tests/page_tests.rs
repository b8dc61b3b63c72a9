// Host-side tests for header, hero and overlay page rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod header {
    include!("../src/header.rs");
}
mod hero {
    include!("../src/hero.rs");
}

use cubeblock_core::overlay::OverlayTransition;
use header::HeaderVisibility;
use hero::gradient_angle_deg;

#[test]
fn header_hides_only_when_scrolling_down_past_threshold() {
    let mut h = HeaderVisibility::new(100.0);
    assert!(h.visible());
    assert!(!h.on_scroll(60.0));
    assert!(h.visible());
    // down past the threshold
    assert!(h.on_scroll(150.0));
    assert!(!h.visible());
    assert!(!h.on_scroll(300.0));
    // any upward scroll brings it back
    assert!(h.on_scroll(290.0));
    assert!(h.visible());
}

#[test]
fn header_stays_visible_near_the_top() {
    let mut h = HeaderVisibility::new(100.0);
    for y in [10.0, 40.0, 80.0, 100.0] {
        h.on_scroll(y);
        assert!(h.visible(), "y={y}");
    }
}

#[test]
fn gradient_angle_spans_from_base() {
    assert_eq!(gradient_angle_deg(0.0, 1000.0, 45.0, 180.0), 45.0);
    assert_eq!(gradient_angle_deg(500.0, 1000.0, 45.0, 180.0), 135.0);
    assert_eq!(gradient_angle_deg(1000.0, 1000.0, 45.0, 180.0), 225.0);
    assert_eq!(gradient_angle_deg(300.0, 0.0, 45.0, 180.0), 45.0);
    assert_eq!(gradient_angle_deg(f32::NAN, 1000.0, 45.0, 180.0), 45.0);
}

#[test]
fn default_overlay_fades_over_300ms() {
    let mut t = OverlayTransition::default();
    t.update(Some(0), 0.0);
    let mid = t.update(Some(0), 0.15);
    assert!((mid.opacity - 0.5).abs() < 1e-4);
    assert!((mid.offset_px - 10.0).abs() < 1e-3);
    assert_eq!(t.update(Some(0), 0.3).opacity, 1.0);
}

mod reveal {
    include!("../src/reveal.rs");
}

#[test]
fn cards_reveal_once_enough_is_visible() {
    use reveal::should_reveal;
    assert!(!should_reveal(false, 1.0, 0.3));
    assert!(!should_reveal(true, 0.1, 0.3));
    assert!(should_reveal(true, 0.3, 0.3));
    assert!(should_reveal(true, 0.2995, 0.3));
    assert!(should_reveal(true, 1.0, 0.3));
}

mod constants {
    include!("../src/constants.rs");
}

const INDEX_HTML: &str = include_str!("../index.html");

#[test]
fn page_shell_has_every_hooked_element() {
    use constants::*;
    for id in [
        CANVAS_ID,
        CONTAINER_ID,
        INTRO_TITLE_ID,
        LAYER_INFO_ID,
        LAYER_TITLE_ID,
        LAYER_DESCRIPTION_ID,
        HEADER_ID,
        HERO_ID,
        HERO_ACCENT_ID,
        RIBBON_CANVAS_ID,
    ] {
        assert!(INDEX_HTML.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
fn content_sections_carry_their_copy() {
    let section = |id: &str| -> &str {
        let start = INDEX_HTML.find(&format!("<section id=\"{id}\"")).unwrap();
        let end = start + INDEX_HTML[start..].find("</section>").unwrap();
        &INDEX_HTML[start..end]
    };
    let how = section("how-we-work");
    for step in ["1. Connect", "2. Unify", "3. Transform", "single, unified layer of intelligence"] {
        assert!(how.contains(step), "how-we-work lacks {step:?}");
    }
    let what = section("what-we-do");
    for card in [
        "Operational Intelligence",
        "Streamline Financial Control",
        "Build Intelligent Dashboards",
        "Predict and Optimize",
        "Sustain with Partnership",
    ] {
        assert!(what.contains(card), "what-we-do lacks {card:?}");
    }
    // every content card fades in on first view
    assert_eq!(how.matches("card reveal").count(), 4);
    assert_eq!(what.matches("card reveal").count(), 5);
}
