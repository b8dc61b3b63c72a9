use crate::gpu::GpuState;
use crate::hero::HeroReveal;
use crate::input::MouseState;
use crate::overlay::OverlayView;
use crate::ribbons::RibbonCanvas;
use crate::scroll::ScrollSource;
use cubeblock_core::overlay::OverlayTransition;
use cubeblock_core::scene::{FrameInput, SceneState, TimelineContext};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub timeline: TimelineContext,
    pub state: SceneState,
    pub scroll: ScrollSource,
    pub mouse: Rc<RefCell<MouseState>>,
    pub overlay: OverlayTransition,
    pub overlay_view: OverlayView,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'a>>,
    pub started: Instant,
    // dropping this cancels a pending hero reveal
    pub hero: Option<HeroReveal>,
    pub ribbons: Option<RibbonCanvas>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        let input = FrameInput {
            progress: self.scroll.read(),
            elapsed_sec: elapsed as f32,
            pointer_ndc: self.mouse.borrow().ndc,
        };
        let previous = self.state.active_layer;
        self.timeline.update(&input, &mut self.state);
        if self.state.active_layer != previous {
            log::info!(
                "[scroll] progress={:.3} active layer {:?} -> {:?}",
                self.state.progress,
                previous,
                self.state.active_layer
            );
        }

        let panel = self.overlay.update(self.state.active_layer, elapsed);
        self.overlay_view.apply(&panel);
        self.overlay_view.set_intro_opacity(self.state.intro_opacity);
        if let Some(ribbons) = &self.ribbons {
            ribbons.draw(elapsed as f32);
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            match gpu.render(&self.timeline, &self.state) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, timeline: &TimelineContext) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas, timeline).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error, continuing without 3D: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
