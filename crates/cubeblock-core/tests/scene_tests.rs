// Frame evaluation through TimelineContext.

use cubeblock_core::constants::*;
use cubeblock_core::scene::{FrameInput, SceneState, TimelineConfig, TimelineContext};
use cubeblock_core::scroll::ScrollProgress;
use cubeblock_core::timeline::TimelineError;
use glam::{Vec2, Vec3};

fn ctx() -> TimelineContext {
    TimelineContext::new(TimelineConfig::default()).unwrap()
}

fn at(p: f32) -> FrameInput {
    FrameInput {
        progress: ScrollProgress::new(p),
        elapsed_sec: 1.5,
        pointer_ndc: Vec2::ZERO,
    }
}

#[test]
fn first_frame_pose() {
    let ctx = ctx();
    let state = SceneState::new(&ctx);
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.active_layer, None);
    assert_eq!(state.camera.eye, Vec3::new(0.0, 0.0, CAMERA_FAR_Z));
    assert_eq!(state.intro_opacity, 1.0);
    assert_eq!(state.tilt, Vec2::new(TILT_X_START, TILT_Y_START));
    let (rest, _) = ctx.config().layer_heights();
    for (layer, y) in state.layers.iter().zip(rest) {
        assert_eq!(layer.y, y);
    }
}

#[test]
fn stack_spreads_and_levels_by_spread_end() {
    let ctx = ctx();
    let (_, spread) = ctx.config().layer_heights();
    for p in [SPREAD_END, 0.5, 1.0] {
        let state = ctx.snapshot(&at(p));
        assert_eq!(state.tilt, Vec2::ZERO);
        for (layer, y) in state.layers.iter().zip(spread) {
            assert_eq!(layer.y, y, "p={p}");
        }
    }
}

#[test]
fn intro_fades_out() {
    let ctx = ctx();
    assert!((ctx.snapshot(&at(0.075)).intro_opacity - 0.5).abs() < 1e-5);
    assert_eq!(ctx.snapshot(&at(INTRO_FADE_END)).intro_opacity, 0.0);
    assert_eq!(ctx.snapshot(&at(0.6)).intro_opacity, 0.0);
}

#[test]
fn snapshot_depends_only_on_input() {
    let ctx = ctx();
    let input = at(0.53);
    let fresh = ctx.snapshot(&input);

    // run the same state through a different history first
    let mut state = SceneState::new(&ctx);
    for p in [0.9, 0.1, 0.7, 0.3] {
        ctx.update(&at(p), &mut state);
    }
    ctx.update(&input, &mut state);

    assert_eq!(state.focus, fresh.focus);
    assert_eq!(state.camera, fresh.camera);
    assert_eq!(state.layers, fresh.layers);
    assert_eq!(state.effects.graph, fresh.effects.graph);
    assert_eq!(state.effects.vortex.positions, fresh.effects.vortex.positions);
    assert_eq!(state.effects.chart.revealed, fresh.effects.chart.revealed);
}

#[test]
fn layer_focus_and_active_layer_agree() {
    let ctx = ctx();
    let state = ctx.snapshot(&at(0.5));
    assert_eq!(state.active_layer, Some(1));
    assert_eq!(state.layers[1].focus, 1.0);
    assert_eq!(state.focus.get(1), 1.0);
    assert_eq!(state.effects.graph.node_opacity, 1.0);
    assert_eq!(state.effects.data_stream.opacity, 0.0);
}

#[test]
fn camera_drifts_towards_the_focused_layer() {
    let ctx = ctx();
    let state = ctx.snapshot(&at(0.3));
    assert!((state.camera.eye.x - CAMERA_DRIFT_PER_FOCUS).abs() < 1e-6);
    assert!(state.camera.eye.z > CAMERA_NEAR_Z && state.camera.eye.z < CAMERA_FAR_Z);
    assert_eq!(state.camera.target.y, state.layers[0].y);
}

#[test]
fn pointer_light_follows_pointer() {
    let ctx = ctx();
    let input = FrameInput {
        pointer_ndc: Vec2::new(0.5, -1.0),
        ..at(0.0)
    };
    let state = ctx.snapshot(&input);
    assert_eq!(state.pointer_light, Vec3::new(5.0, -10.0, POINTER_LIGHT_Z));
}

#[test]
fn effects_sit_on_the_front_face() {
    let ctx = ctx();
    let state = ctx.snapshot(&at(0.5));
    for layer in &state.layers {
        let center = layer.effect_transform.transform_point3(Vec3::ZERO);
        let expected = Vec3::new(0.0, layer.y, CUBE_SIZE / 2.0 + EFFECT_FACE_OFFSET);
        assert!(center.distance(expected) < 1e-5);
    }
}

#[test]
fn rejects_inverted_layer_range() {
    let config = TimelineConfig {
        layer_ranges: [[0.4, 0.25], [0.45, 0.60], [0.65, 0.80], [0.85, 1.00]],
        ..Default::default()
    };
    assert!(matches!(
        TimelineContext::new(config),
        Err(TimelineError::InvertedRange { .. })
    ));
}
