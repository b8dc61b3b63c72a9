use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Accent gradient angle in degrees for a pointer at `x` across `width`.
#[inline]
pub fn gradient_angle_deg(x: f32, width: f32, base_deg: f32, span_deg: f32) -> f32 {
    if width <= 0.0 || !x.is_finite() {
        return base_deg;
    }
    (x / width).clamp(0.0, 1.0) * span_deg + base_deg
}

/// One-shot delayed reveal of the hero copy.
///
/// The pending timeout is cancelled if the guard is dropped first.
pub struct HeroReveal {
    window: web::Window,
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl HeroReveal {
    pub fn start(window: &web::Window, hero: web::Element, visible_class: &'static str, delay_ms: i32) -> Self {
        let callback = Closure::wrap(Box::new(move || {
            let _ = hero.class_list().add_1(visible_class);
            log::info!("[hero] revealed");
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), delay_ms)
            .map_err(|e| log::warn!("[hero] setTimeout failed: {:?}", e))
            .ok();
        Self {
            window: window.clone(),
            handle,
            _callback: callback,
        }
    }
}

impl Drop for HeroReveal {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
