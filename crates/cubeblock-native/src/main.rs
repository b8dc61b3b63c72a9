use std::time::Instant;
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use cubeblock_core::overlay::{OverlayTransition, LAYER_INFO};
use cubeblock_core::render::SceneRenderer;
use cubeblock_core::scene::{FrameInput, SceneState, TimelineConfig, TimelineContext};
use glam::Vec2;

mod virtual_scroll;
use virtual_scroll::VirtualScroll;

const PAGE_SCREENS: f32 = 5.0; // container height in viewports (500vh)
const WHEEL_LINE_PX: f32 = 40.0;
const KEY_STEP_PX: f32 = 60.0;
const WINDOW_TITLE: &str = "AI Engine w11.01";

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, timeline: &TimelineContext) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let renderer = SceneRenderer::new(&device, format, timeline, width, height);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            width,
            height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer.resize(&self.device, self.width, self.height);
    }

    fn render(&mut self, timeline: &TimelineContext, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let aspect = self.width as f32 / self.height as f32;
        self.renderer.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            timeline,
            state,
            aspect,
        );
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Scroll-driven scene plus the window-title stand-in for the info panel.
struct Preview {
    timeline: TimelineContext,
    state: SceneState,
    scroll: VirtualScroll,
    pointer_ndc: Vec2,
    overlay: OverlayTransition,
    panel_layer: Option<usize>,
    started: Instant,
}

impl Preview {
    fn new(timeline: TimelineContext, viewport_height: f32) -> Self {
        let state = SceneState::new(&timeline);
        Self {
            timeline,
            state,
            scroll: VirtualScroll::new(viewport_height, PAGE_SCREENS),
            pointer_ndc: Vec2::ZERO,
            overlay: OverlayTransition::default(),
            panel_layer: None,
            started: Instant::now(),
        }
    }

    fn on_key(&mut self, key: &Key) {
        let page = self.scroll.metrics().viewport_height;
        match key {
            Key::Named(NamedKey::ArrowDown) => self.scroll.scroll_by(KEY_STEP_PX),
            Key::Named(NamedKey::ArrowUp) => self.scroll.scroll_by(-KEY_STEP_PX),
            Key::Named(NamedKey::PageDown) | Key::Named(NamedKey::Space) => self.scroll.scroll_by(page),
            Key::Named(NamedKey::PageUp) => self.scroll.scroll_by(-page),
            Key::Named(NamedKey::Home) => self.scroll.scroll_to(0.0),
            Key::Named(NamedKey::End) => self.scroll.scroll_to(self.scroll.max_scroll()),
            _ => {}
        }
    }

    fn on_cursor(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let u = (x / width as f64).clamp(0.0, 1.0) as f32;
        let v = (y / height as f64).clamp(0.0, 1.0) as f32;
        self.pointer_ndc = Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0);
    }

    /// Advance one frame; returns a new window title when the panel changes.
    fn tick(&mut self) -> Option<String> {
        let elapsed = self.started.elapsed().as_secs_f64();
        let input = FrameInput {
            progress: self.scroll.progress(),
            elapsed_sec: elapsed as f32,
            pointer_ndc: self.pointer_ndc,
        };
        self.timeline.update(&input, &mut self.state);

        let panel = self.overlay.update(self.state.active_layer, elapsed);
        if panel.layer == self.panel_layer {
            return None;
        }
        log::info!(
            "[overlay] progress={:.3} panel {:?} -> {:?}",
            self.state.progress,
            self.panel_layer,
            panel.layer
        );
        self.panel_layer = panel.layer;
        Some(match panel.layer.and_then(|i| LAYER_INFO.get(i)) {
            Some(info) => format!("{} - {}", WINDOW_TITLE, info.title),
            None => WINDOW_TITLE.to_string(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let timeline = TimelineContext::new(TimelineConfig::default())?;
    let mut gpu = pollster::block_on(GpuState::new(&window, &timeline))?;
    let mut preview = Preview::new(timeline, gpu.height as f32);
    log::info!("[scroll] wheel, arrows, PageUp/PageDown, Home/End scrub the page");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                preview.scroll.set_viewport_height(size.height as f32);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                preview.scroll.scroll_by(dy);
            }
            WindowEvent::CursorMoved { position, .. } => {
                preview.on_cursor(position.x, position.y, gpu.width, gpu.height);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                preview.on_key(&event.logical_key);
            }
            _ => {}
        },
        Event::AboutToWait => {
            if let Some(title) = preview.tick() {
                gpu.window.set_title(&title);
            }
            match gpu.render(&preview.timeline, &preview.state) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
