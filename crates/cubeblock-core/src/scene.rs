//! Per-frame scene evaluation.
//!
//! [`TimelineContext`] owns every timeline and seeded effect layout. Each
//! frame the front-end hands it a [`FrameInput`] and a [`SceneState`] to fill;
//! the result depends only on that input, so scrolling back and forth always
//! reproduces the same scene.

use crate::camera::{CameraPath, CameraPathConfig, CameraPose};
use crate::constants::*;
use crate::effects::{EffectStates, LayerEffects};
use crate::focus::{FocusController, FocusSet, KeyframeRange, RampWidth};
use crate::scroll::ScrollProgress;
use crate::timeline::{Timeline, TimelineError};
use glam::{EulerRot, Mat4, Vec2, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    pub layer_ranges: [[f32; 2]; LAYER_COUNT],
    pub ramp: RampWidth,
    /// Progress at which the stack is fully spread and untilted.
    pub spread_end: f32,
    pub cube_size: f32,
    pub layer_spacing: f32,
    pub camera: CameraPathConfig,
    pub intro_fade_end: f32,
    /// Initial scene tilt (x, y) in radians, eased to zero by `spread_end`.
    pub tilt_start: Vec2,
    pub colors: [[f32; 3]; LAYER_COUNT],
    pub effect_seed: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            layer_ranges: LAYER_RANGES,
            ramp: RampWidth::default(),
            spread_end: SPREAD_END,
            cube_size: CUBE_SIZE,
            layer_spacing: LAYER_SPACING,
            camera: CameraPathConfig::default(),
            intro_fade_end: INTRO_FADE_END,
            tilt_start: Vec2::new(TILT_X_START, TILT_Y_START),
            colors: LAYER_COLORS,
            effect_seed: DEFAULT_EFFECT_SEED,
        }
    }
}

impl TimelineConfig {
    pub fn layer_height(&self) -> f32 {
        self.cube_size / LAYER_COUNT as f32
    }

    /// Resting (stacked) and spread heights of each layer, top layer first.
    pub fn layer_heights(&self) -> ([f32; LAYER_COUNT], [f32; LAYER_COUNT]) {
        let lh = self.layer_height();
        let mut rest = [0.0; LAYER_COUNT];
        let mut spread = [0.0; LAYER_COUNT];
        for i in 0..LAYER_COUNT {
            let y_factor = (LAYER_COUNT - 1 - i) as f32 - (LAYER_COUNT - 1) as f32 / 2.0;
            rest[i] = y_factor * lh;
            spread[i] = y_factor * (lh + self.layer_spacing);
        }
        (rest, spread)
    }
}

/// Everything a frame depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub progress: ScrollProgress,
    pub elapsed_sec: f32,
    /// Pointer in normalized device coordinates, (-1,-1) bottom-left.
    pub pointer_ndc: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerVisual {
    pub y: f32,
    pub color: [f32; 3],
    pub focus: f32,
    /// Unit cube to world, including the scene tilt.
    pub transform: Mat4,
    /// Layer-face space (effects) to world.
    pub effect_transform: Mat4,
}

/// Render-state snapshot rewritten in place every frame.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub progress: f32,
    pub focus: FocusSet,
    pub active_layer: Option<usize>,
    pub camera: CameraPose,
    pub tilt: Vec2,
    pub intro_opacity: f32,
    pub pointer_light: Vec3,
    pub layers: [LayerVisual; LAYER_COUNT],
    pub effects: EffectStates,
}

impl SceneState {
    /// Snapshot holding the first-frame pose (progress 0, time 0).
    pub fn new(ctx: &TimelineContext) -> Self {
        let mut state = Self {
            progress: 0.0,
            focus: FocusSet::default(),
            active_layer: None,
            camera: CameraPose::default(),
            tilt: Vec2::ZERO,
            intro_opacity: 1.0,
            pointer_light: Vec3::new(0.0, 0.0, POINTER_LIGHT_Z),
            layers: [LayerVisual::default(); LAYER_COUNT],
            effects: EffectStates::new(&ctx.effects),
        };
        ctx.update(&FrameInput::default(), &mut state);
        state
    }
}

#[derive(Clone, Debug)]
pub struct TimelineContext {
    config: TimelineConfig,
    focus: FocusController,
    camera: CameraPath,
    layer_heights: [Timeline<f32>; LAYER_COUNT],
    tilt: Timeline<Vec2>,
    intro: Timeline<f32>,
    effects: LayerEffects,
}

impl TimelineContext {
    pub fn new(config: TimelineConfig) -> Result<Self, TimelineError> {
        let ranges = [
            KeyframeRange::new(config.layer_ranges[0][0], config.layer_ranges[0][1])?,
            KeyframeRange::new(config.layer_ranges[1][0], config.layer_ranges[1][1])?,
            KeyframeRange::new(config.layer_ranges[2][0], config.layer_ranges[2][1])?,
            KeyframeRange::new(config.layer_ranges[3][0], config.layer_ranges[3][1])?,
        ];
        let focus = FocusController::new(ranges, config.ramp)?;
        let (rest, spread) = config.layer_heights();
        let camera = CameraPath::new(&config.camera, spread)?;
        let height = |i: usize| Timeline::linear((0.0, rest[i]), (config.spread_end, spread[i]));
        let layer_heights = [height(0)?, height(1)?, height(2)?, height(3)?];
        let tilt = Timeline::linear((0.0, config.tilt_start), (config.spread_end, Vec2::ZERO))?;
        let intro = Timeline::linear((0.0, 1.0), (config.intro_fade_end, 0.0))?;
        let effects = LayerEffects::seeded(config.effect_seed, config.cube_size);
        log::debug!(
            "[timeline] ranges={:?} graph_edges={}",
            config.layer_ranges,
            effects.graph.edges.len()
        );
        Ok(Self {
            config,
            focus,
            camera,
            layer_heights,
            tilt,
            intro,
            effects,
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn camera_path(&self) -> &CameraPath {
        &self.camera
    }

    pub fn effects(&self) -> &LayerEffects {
        &self.effects
    }

    /// Evaluate one frame into `state`.
    ///
    /// Progress is read once, so every layer in the frame sees the same value.
    pub fn update(&self, input: &FrameInput, state: &mut SceneState) {
        let p = input.progress.get();
        let t = input.elapsed_sec;
        let focus = self.focus.evaluate(p);

        state.progress = p;
        state.focus = focus;
        state.active_layer = self.focus.active_index(p);
        state.camera = self.camera.pose(p, &focus);
        state.tilt = self.tilt.sample(p);
        state.intro_opacity = self.intro.sample(p);
        state.pointer_light = Vec3::new(
            input.pointer_ndc.x * POINTER_LIGHT_RANGE,
            input.pointer_ndc.y * POINTER_LIGHT_RANGE,
            POINTER_LIGHT_Z,
        );

        let group = Mat4::from_euler(EulerRot::XYZ, state.tilt.x, state.tilt.y, 0.0);
        let size = Vec3::new(
            self.config.cube_size,
            self.config.layer_height(),
            self.config.cube_size,
        );
        let face = Vec3::new(0.0, 0.0, self.config.cube_size / 2.0 + EFFECT_FACE_OFFSET);
        for (i, layer) in state.layers.iter_mut().enumerate() {
            let y = self.layer_heights[i].sample(p);
            let base = group * Mat4::from_translation(Vec3::new(0.0, y, 0.0));
            layer.y = y;
            layer.color = self.config.colors[i];
            layer.focus = focus.get(i);
            layer.transform = base * Mat4::from_scale(size);
            layer.effect_transform = base * Mat4::from_translation(face);
        }

        let fx = &mut state.effects;
        self.effects.data_stream.update(focus.get(0), t, &mut fx.data_stream);
        fx.graph = self.effects.graph.update(focus.get(1), t);
        self.effects.vortex.update(focus.get(2), t, &mut fx.vortex);
        self.effects.chart.update(focus.get(3), &mut fx.chart);
    }

    pub fn snapshot(&self, input: &FrameInput) -> SceneState {
        let mut state = SceneState::new(self);
        self.update(input, &mut state);
        state
    }
}
