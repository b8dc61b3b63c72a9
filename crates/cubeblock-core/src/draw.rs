//! GPU-ready packing of a [`SceneState`].
//!
//! Kept free of any graphics API so both front-ends and the host tests can
//! inspect exactly what will be drawn. Buffers are cleared and refilled each
//! frame without giving back their capacity.

use crate::camera::Camera;
use crate::constants::*;
use crate::scene::{SceneState, TimelineContext};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub camera_pos: [f32; 4],
    pub light_pos: [f32; 4],
}

impl Globals {
    pub fn new(state: &SceneState, aspect: f32) -> Self {
        let camera = Camera::from_pose(state.camera, aspect);
        let view = camera.view_matrix();
        Self {
            view_proj: (camera.projection_matrix() * view).to_cols_array_2d(),
            camera_right: view.row(0).truncate().extend(0.0).to_array(),
            camera_up: view.row(1).truncate().extend(0.0).to_array(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            light_pos: state.pointer_light.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4], // x: strength
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center_size: [f32; 4], // xyz world center, w diameter
    pub color: [f32; 4],       // rgb, a opacity
    pub params: [f32; 4],      // x: emissive intensity
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

/// Two triangles covering a unit quad centered on the origin.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

/// Unit cube centered on the origin with per-face normals.
pub fn unit_cube() -> [MeshVertex; 36] {
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut out = [MeshVertex {
        position: [0.0; 3],
        normal: [0.0; 3],
    }; 36];
    for (f, (n, u, v)) in faces.iter().enumerate() {
        for (k, [cu, cv]) in QUAD_CORNERS.iter().enumerate() {
            let p = *n * 0.5 + *u * *cu + *v * *cv;
            out[f * 6 + k] = MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            };
        }
    }
    out
}

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub boxes: Vec<BoxInstance>,
    pub sprites: Vec<SpriteInstance>,
    pub lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn new(ctx: &TimelineContext) -> Self {
        let fx = ctx.effects();
        let sprites = fx.data_stream.particles.len() + fx.graph.nodes.len() + fx.vortex.radii.len() + 2;
        let lines = 2 * (fx.graph.edges.len() + fx.chart.points.len());
        Self {
            boxes: Vec::with_capacity(LAYER_COUNT),
            sprites: Vec::with_capacity(sprites),
            lines: Vec::with_capacity(lines),
        }
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
        self.sprites.clear();
        self.lines.clear();
    }

    fn sprite(&mut self, at: Vec3, diameter: f32, rgb: [f32; 3], opacity: f32, emissive: f32) {
        self.sprites.push(SpriteInstance {
            center_size: at.extend(diameter).to_array(),
            color: rgba(rgb, opacity),
            params: [emissive, 0.0, 0.0, 0.0],
        });
    }

    fn line(&mut self, a: Vec3, b: Vec3, rgb: [f32; 3], opacity: f32) {
        let color = rgba(rgb, opacity);
        self.lines.push(LineVertex {
            position: a.extend(1.0).to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: b.extend(1.0).to_array(),
            color,
        });
    }

    /// Rebuild the draw list for `state`. Effects with no focus are skipped.
    pub fn fill(&mut self, ctx: &TimelineContext, state: &SceneState) {
        self.clear();
        for layer in &state.layers {
            self.boxes.push(BoxInstance {
                model: layer.transform.to_cols_array_2d(),
                color: rgba(layer.color, LAYER_OPACITY),
                emissive: [LAYER_EMISSIVE, 0.0, 0.0, 0.0],
            });
        }

        let layouts = ctx.effects();
        let fx = &state.effects;
        let face = |i: usize| -> Mat4 { state.layers[i].effect_transform };

        if fx.data_stream.opacity > 0.0 {
            let m = face(0);
            for p in &fx.data_stream.positions {
                self.sprite(
                    m.transform_point3(*p),
                    DATA_STREAM_RADIUS * 2.0,
                    EFFECT_COLOR,
                    fx.data_stream.opacity,
                    0.5,
                );
            }
        }

        let graph = &fx.graph;
        if graph.node_opacity > 0.0 {
            let m = face(1);
            for node in &layouts.graph.nodes {
                self.sprite(
                    m.transform_point3(*node),
                    GRAPH_NODE_RADIUS * 2.0 * graph.node_scale,
                    GRAPH_GLOW_COLOR,
                    graph.node_opacity,
                    graph.node_emissive,
                );
            }
            for [a, b] in layouts.graph.edges.iter().take(graph.lit_edges) {
                self.line(
                    m.transform_point3(layouts.graph.nodes[*a]),
                    m.transform_point3(layouts.graph.nodes[*b]),
                    GRAPH_GLOW_COLOR,
                    graph.edge_opacity,
                );
            }
            self.sprite(
                m.transform_point3(Vec3::ZERO),
                GRAPH_CORE_RADIUS * 2.0 * graph.core.scale,
                GRAPH_GLOW_COLOR,
                graph.core.opacity,
                graph.core.emissive,
            );
        }

        let vortex = &fx.vortex;
        if vortex.opacity > 0.0 {
            let m = face(2);
            for p in &vortex.positions {
                self.sprite(m.transform_point3(*p), vortex.point_size, EFFECT_COLOR, vortex.opacity, 0.0);
            }
            self.sprite(
                m.transform_point3(Vec3::ZERO),
                VORTEX_CORE_RADIUS * 2.0 * vortex.core.scale,
                EFFECT_COLOR,
                vortex.core.opacity,
                vortex.core.emissive,
            );
        }

        let chart = &fx.chart;
        if chart.visible {
            let m = face(3);
            for pair in chart.revealed.windows(2) {
                self.line(
                    m.transform_point3(pair[0]),
                    m.transform_point3(pair[1]),
                    CHART_COLOR,
                    chart.opacity,
                );
            }
        }
    }
}
