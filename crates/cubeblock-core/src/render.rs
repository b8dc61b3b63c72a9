//! wgpu renderer for a [`SceneState`], shared by the web and native front-ends.
//!
//! The caller owns the surface; this type owns pipelines, the depth target and
//! instance buffers that grow on demand and are otherwise reused.

use crate::draw::{BoxInstance, DrawList, Globals, LineVertex, MeshVertex, SpriteInstance, QUAD_CORNERS};
use crate::scene::{SceneState, TimelineContext};
use wgpu::util::DeviceExt;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

const MESH_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const BOX_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
    6 => Float32x4, 7 => Float32x4
];
const QUAD_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const SPRITE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4, 3 => Float32x4];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

fn layout<T>(step_mode: wgpu::VertexStepMode, attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<T>() as u64,
        step_mode,
        attributes,
    }
}

pub fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("scene_depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

struct PipelineSpec<'a> {
    label: &'a str,
    vs: &'a str,
    fs: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    topology: wgpu::PrimitiveTopology,
    depth_write: bool,
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(spec.vs),
            buffers: spec.buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: spec.depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(spec.fs),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Vertex buffer that is reallocated only when a frame needs more room.
struct GrowableBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: u64,
}

impl GrowableBuffer {
    fn new(device: &wgpu::Device, label: &'static str, capacity: u64) -> Self {
        let capacity = capacity.max(256);
        Self {
            label,
            buffer: Self::allocate(device, label, capacity),
            capacity,
        }
    }

    fn allocate(device: &wgpu::Device, label: &'static str, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) {
        let len = bytes.len() as u64;
        if len > self.capacity {
            self.capacity = len.next_power_of_two();
            log::debug!("[gpu] grow {} to {} bytes", self.label, self.capacity);
            self.buffer = Self::allocate(device, self.label, self.capacity);
        }
        if len > 0 {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
    }
}

pub struct SceneRenderer {
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    box_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    cube_vb: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    boxes: GrowableBuffer,
    sprites: GrowableBuffer,
    lines: GrowableBuffer,
    depth: (wgpu::Texture, wgpu::TextureView),
    draw: DrawList,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        ctx: &TimelineContext,
        width: u32,
        height: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let box_pipeline = make_pipeline(
            device,
            &pl,
            &shader,
            color_format,
            PipelineSpec {
                label: "box_pipeline",
                vs: "vs_box",
                fs: "fs_box",
                buffers: &[
                    layout::<MeshVertex>(wgpu::VertexStepMode::Vertex, &MESH_ATTRS),
                    layout::<BoxInstance>(wgpu::VertexStepMode::Instance, &BOX_ATTRS),
                ],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: true,
            },
        );
        let sprite_pipeline = make_pipeline(
            device,
            &pl,
            &shader,
            color_format,
            PipelineSpec {
                label: "sprite_pipeline",
                vs: "vs_sprite",
                fs: "fs_sprite",
                buffers: &[
                    layout::<[f32; 2]>(wgpu::VertexStepMode::Vertex, &QUAD_ATTRS),
                    layout::<SpriteInstance>(wgpu::VertexStepMode::Instance, &SPRITE_ATTRS),
                ],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: false,
            },
        );
        let line_pipeline = make_pipeline(
            device,
            &pl,
            &shader,
            color_format,
            PipelineSpec {
                label: "line_pipeline",
                vs: "vs_line",
                fs: "fs_line",
                buffers: &[layout::<LineVertex>(wgpu::VertexStepMode::Vertex, &LINE_ATTRS)],
                topology: wgpu::PrimitiveTopology::LineList,
                depth_write: false,
            },
        );

        let cube_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&crate::draw::unit_cube()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let draw = DrawList::new(ctx);
        let boxes = GrowableBuffer::new(
            device,
            "box_instances",
            (draw.boxes.capacity() * std::mem::size_of::<BoxInstance>()) as u64,
        );
        let sprites = GrowableBuffer::new(
            device,
            "sprite_instances",
            (draw.sprites.capacity() * std::mem::size_of::<SpriteInstance>()) as u64,
        );
        let lines = GrowableBuffer::new(
            device,
            "line_vertices",
            (draw.lines.capacity() * std::mem::size_of::<LineVertex>()) as u64,
        );

        Self {
            globals_buffer,
            bind_group,
            box_pipeline,
            sprite_pipeline,
            line_pipeline,
            cube_vb,
            quad_vb,
            boxes,
            sprites,
            lines,
            depth: create_depth_texture(device, width, height),
            draw,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = create_depth_texture(device, width, height);
    }

    /// Record the scene into `encoder`, clearing `target` first.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        ctx: &TimelineContext,
        state: &SceneState,
        aspect: f32,
    ) {
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&Globals::new(state, aspect)));
        self.draw.fill(ctx, state);
        self.boxes.upload(device, queue, bytemuck::cast_slice(&self.draw.boxes));
        self.sprites.upload(device, queue, bytemuck::cast_slice(&self.draw.sprites));
        self.lines.upload(device, queue, bytemuck::cast_slice(&self.draw.lines));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.1,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);

        let n_boxes = self.draw.boxes.len() as u32;
        if n_boxes > 0 {
            rpass.set_pipeline(&self.box_pipeline);
            rpass.set_vertex_buffer(0, self.cube_vb.slice(..));
            rpass.set_vertex_buffer(1, self.boxes.buffer.slice(..));
            rpass.draw(0..36, 0..n_boxes);
        }
        let n_lines = self.draw.lines.len() as u32;
        if n_lines > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.lines.buffer.slice(..));
            rpass.draw(0..n_lines, 0..1);
        }
        let n_sprites = self.draw.sprites.len() as u32;
        if n_sprites > 0 {
            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.sprites.buffer.slice(..));
            rpass.draw(0..QUAD_CORNERS.len() as u32, 0..n_sprites);
        }
    }
}
