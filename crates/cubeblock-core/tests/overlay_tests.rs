// Layer info panel transitions.

use cubeblock_core::overlay::{OverlayTransition, LAYER_INFO};

const FADE: f64 = 0.25;
const SLIDE: f32 = 20.0;

fn shown(layer: usize) -> OverlayTransition {
    let mut t = OverlayTransition::new(FADE, SLIDE);
    t.update(Some(layer), 0.0);
    t.update(Some(layer), 1.0);
    assert!(t.is_settled());
    t
}

#[test]
fn starts_hidden() {
    let mut t = OverlayTransition::new(FADE, SLIDE);
    let f = t.update(None, 0.0);
    assert_eq!(f.layer, None);
    assert_eq!(f.opacity, 0.0);
    assert!(t.is_settled());
}

#[test]
fn fades_and_slides_in() {
    let mut t = OverlayTransition::new(FADE, SLIDE);
    let f = t.update(Some(0), 0.0);
    assert_eq!((f.layer, f.opacity, f.offset_px), (Some(0), 0.0, 20.0));
    let f = t.update(Some(0), 0.125);
    assert_eq!((f.opacity, f.offset_px), (0.5, 10.0));
    let f = t.update(Some(0), 0.25);
    assert_eq!((f.opacity, f.offset_px), (1.0, 0.0));
    assert!(t.is_settled());
}

#[test]
fn exits_before_the_next_panel_enters() {
    let mut t = shown(0);
    let f = t.update(Some(1), 1.0);
    assert_eq!((f.layer, f.opacity), (Some(0), 1.0));
    assert_eq!(t.queued_layer(), Some(1));

    let f = t.update(Some(1), 1.125);
    assert_eq!((f.layer, f.opacity, f.offset_px), (Some(0), 0.5, -10.0));

    let f = t.update(Some(1), 1.25);
    assert_eq!((f.layer, f.opacity), (Some(1), 0.0));

    let f = t.update(Some(1), 1.5);
    assert_eq!((f.layer, f.opacity), (Some(1), 1.0));
}

#[test]
fn only_the_newest_target_is_queued() {
    let mut t = shown(0);
    t.update(Some(1), 1.0);
    t.update(Some(2), 1.1);
    assert_eq!(t.visible_layer(), Some(0));
    assert_eq!(t.queued_layer(), Some(2));
    let f = t.update(Some(2), 1.25);
    assert_eq!(f.layer, Some(2));
}

#[test]
fn reversal_continues_from_current_opacity() {
    let mut t = shown(0);
    t.update(Some(1), 1.0);
    let out = t.update(Some(1), 1.125);
    let back = t.update(Some(0), 1.125);
    assert_eq!(back.layer, Some(0));
    assert_eq!(back.opacity, out.opacity);
    let f = t.update(Some(0), 1.25);
    assert_eq!(f.opacity, 1.0);
}

#[test]
fn late_frame_jumps_straight_to_the_new_panel() {
    let mut t = shown(0);
    t.update(Some(2), 5.0);
    let f = t.update(Some(2), 10.0);
    assert_eq!((f.layer, f.opacity, f.offset_px), (Some(2), 1.0, 0.0));
    assert!(t.is_settled());
}

#[test]
fn leaving_every_range_hides_the_panel() {
    let mut t = shown(3);
    t.update(None, 2.0);
    let f = t.update(None, 2.25);
    assert_eq!(f.layer, None);
    assert_eq!(t.visible_layer(), None);
}

#[test]
fn zero_fade_switches_immediately() {
    let mut t = OverlayTransition::new(0.0, SLIDE);
    assert_eq!(t.update(Some(1), 0.0).opacity, 1.0);
    let f = t.update(Some(2), 0.0);
    assert_eq!((f.layer, f.opacity), (Some(2), 1.0));
}

#[test]
fn every_layer_has_copy() {
    for info in LAYER_INFO {
        assert!(!info.title.is_empty());
        assert!(!info.description.is_empty());
    }
}
