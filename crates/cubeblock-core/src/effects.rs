//! Decorative per-layer effects.
//!
//! Layouts are drawn once from a seeded RNG. After that every effect is a
//! pure function of the owning layer's focus and elapsed time, writing into
//! buffers allocated by [`EffectStates::new`].

use crate::constants::*;
use crate::timeline::Lerp;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    <f32 as Lerp>::lerp(a, b, t)
}

/// Derive an independent RNG per effect from the base seed.
fn effect_rng(seed: u64, salt: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Pulsing sphere at the center of a layer face.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowCore {
    pub scale: f32,
    pub emissive: f32,
    pub opacity: f32,
}

// ---------------- Layer 0: data stream ----------------

#[derive(Clone, Copy, Debug)]
pub struct StreamParticle {
    pub phase: f32,
    pub speed: f32, // authored per frame at DATA_STREAM_FRAME_RATE
    pub origin: Vec3,
}

#[derive(Clone, Debug)]
pub struct DataStream {
    pub particles: Vec<StreamParticle>,
}

#[derive(Clone, Debug, Default)]
pub struct DataStreamState {
    pub positions: Vec<Vec3>,
    pub opacity: f32,
}

impl DataStream {
    pub fn seeded(rng: &mut StdRng, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| StreamParticle {
                phase: rng.gen::<f32>() * 100.0,
                speed: 0.005 + rng.gen::<f32>() / 500.0,
                origin: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 10.0,
                    (rng.gen::<f32>() - 0.5) * 5.0,
                    (rng.gen::<f32>() - 0.5) * 10.0,
                ),
            })
            .collect();
        Self { particles }
    }

    /// Particles stream from their origin towards the face center and wrap.
    pub fn update(&self, focus: f32, elapsed_sec: f32, out: &mut DataStreamState) {
        out.opacity = focus;
        out.positions.clear();
        out.positions.extend(self.particles.iter().map(|p| {
            let t = (p.phase + p.speed * DATA_STREAM_FRAME_RATE * elapsed_sec).rem_euclid(100.0);
            p.origin * (1.0 - t.fract())
        }));
    }
}

// ---------------- Layer 1: neural graph ----------------

#[derive(Clone, Debug)]
pub struct NeuralGraph {
    pub nodes: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphState {
    pub node_scale: f32,
    pub node_emissive: f32,
    pub node_opacity: f32,
    /// Edges `0..lit_edges` are drawn.
    pub lit_edges: usize,
    pub edge_opacity: f32,
    pub core: GlowCore,
}

impl NeuralGraph {
    pub fn seeded(rng: &mut StdRng, count: usize, cube_size: f32) -> Self {
        let half = cube_size / 2.0 * 0.8;
        let nodes: Vec<Vec3> = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * half * 2.0,
                    (rng.gen::<f32>() - 0.5) * half * 2.0,
                    (rng.gen::<f32>() - 0.5) * 0.1,
                )
            })
            .collect();
        let reach = cube_size * 0.7;
        let mut edges = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if nodes[i].distance(nodes[j]) < reach {
                    edges.push([i, j]);
                }
            }
        }
        Self { nodes, edges }
    }

    /// Nodes brighten and grow while edges light up in order.
    pub fn update(&self, focus: f32, elapsed_sec: f32) -> GraphState {
        let wave = (elapsed_sec * 3.0).sin();
        GraphState {
            node_scale: lerp(0.05, 0.15, focus),
            node_emissive: lerp(0.0, 10.0 + 3.0 * wave, focus),
            node_opacity: focus,
            lit_edges: ((self.edges.len() as f32 * focus).floor() as usize).min(self.edges.len()),
            edge_opacity: lerp(0.0, 0.8, focus),
            core: GlowCore {
                scale: lerp(0.05, 0.15 + 0.03 * wave, focus),
                emissive: lerp(0.0, 15.0 + 5.0 * wave, focus),
                opacity: focus,
            },
        }
    }
}

// ---------------- Layer 2: vortex ----------------

#[derive(Clone, Debug)]
pub struct Vortex {
    pub radii: Vec<f32>,
    pub cube_size: f32,
}

#[derive(Clone, Debug, Default)]
pub struct VortexState {
    pub positions: Vec<Vec3>,
    pub opacity: f32,
    pub point_size: f32,
    pub core: GlowCore,
}

impl Vortex {
    pub fn seeded(rng: &mut StdRng, count: usize, cube_size: f32) -> Self {
        let radii = (0..count)
            .map(|_| rng.gen::<f32>().sqrt() * cube_size * 0.4)
            .collect();
        Self { radii, cube_size }
    }

    pub fn update(&self, focus: f32, elapsed_sec: f32, out: &mut VortexState) {
        let t = elapsed_sec;
        let swirl = focus;
        let (sway_x, sway_y) = ((t * 0.3).sin(), (t * 0.3).cos());
        out.positions.clear();
        out.positions.extend(self.radii.iter().enumerate().map(|(i, &r)| {
            let theta = (t * 0.5 + i as f32 * 0.1).rem_euclid(TAU);
            Vec3::new(
                r * (theta + swirl * sway_x).cos(),
                r * (theta + swirl * sway_y).sin(),
                (t + i as f32).sin() * 0.1 * self.cube_size * swirl,
            )
        }));
        out.opacity = focus;
        out.point_size = lerp(0.01, 0.05, focus);
        let wave = (t * 4.0).sin();
        out.core = GlowCore {
            scale: lerp(0.01, 0.2 + 0.05 * wave, focus),
            emissive: lerp(0.0, 20.0 + 10.0 * wave, focus),
            opacity: focus,
        };
    }
}

// ---------------- Layer 3: line chart ----------------

#[derive(Clone, Debug)]
pub struct LineChart {
    pub points: Vec<Vec3>,
}

#[derive(Clone, Debug, Default)]
pub struct ChartState {
    /// Visible prefix of the polyline, ending mid-segment while revealing.
    pub revealed: Vec<Vec3>,
    pub opacity: f32,
    pub visible: bool,
}

impl LineChart {
    pub fn seeded(rng: &mut StdRng, count: usize, cube_size: f32) -> Self {
        let half = cube_size / 2.0 * 0.9;
        let step = if count > 1 {
            half * 2.0 / (count - 1) as f32
        } else {
            0.0
        };
        let points = (0..count)
            .map(|i| {
                Vec3::new(
                    i as f32 * step - half,
                    (rng.gen::<f32>() - 0.5) * half * 0.5,
                    0.0,
                )
            })
            .collect();
        Self { points }
    }

    pub fn update(&self, focus: f32, out: &mut ChartState) {
        out.opacity = focus;
        out.visible = focus > 0.0;
        out.revealed.clear();
        if !out.visible || self.points.is_empty() {
            return;
        }
        let segments = self.points.len() - 1;
        let reach = focus.clamp(0.0, 1.0) * segments as f32;
        let whole = (reach.floor() as usize).min(segments);
        out.revealed.extend_from_slice(&self.points[..=whole]);
        let partial = reach - whole as f32;
        if whole < segments && partial > 0.0 {
            out.revealed
                .push(self.points[whole].lerp(self.points[whole + 1], partial));
        }
    }
}

/// All seeded effect layouts.
#[derive(Clone, Debug)]
pub struct LayerEffects {
    pub data_stream: DataStream,
    pub graph: NeuralGraph,
    pub vortex: Vortex,
    pub chart: LineChart,
}

impl LayerEffects {
    pub fn seeded(seed: u64, cube_size: f32) -> Self {
        Self {
            data_stream: DataStream::seeded(&mut effect_rng(seed, 0), DATA_STREAM_PARTICLES),
            graph: NeuralGraph::seeded(&mut effect_rng(seed, 1), GRAPH_NODES, cube_size),
            vortex: Vortex::seeded(&mut effect_rng(seed, 2), VORTEX_POINTS, cube_size),
            chart: LineChart::seeded(&mut effect_rng(seed, 3), CHART_POINTS, cube_size),
        }
    }
}

/// Per-frame output of every effect.
#[derive(Clone, Debug, Default)]
pub struct EffectStates {
    pub data_stream: DataStreamState,
    pub graph: GraphState,
    pub vortex: VortexState,
    pub chart: ChartState,
}

impl EffectStates {
    pub fn new(effects: &LayerEffects) -> Self {
        Self {
            data_stream: DataStreamState {
                positions: Vec::with_capacity(effects.data_stream.particles.len()),
                opacity: 0.0,
            },
            graph: GraphState::default(),
            vortex: VortexState {
                positions: Vec::with_capacity(effects.vortex.radii.len()),
                ..Default::default()
            },
            chart: ChartState {
                revealed: Vec::with_capacity(effects.chart.points.len() + 1),
                ..Default::default()
            },
        }
    }
}
