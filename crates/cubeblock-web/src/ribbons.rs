use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

pub const RIBBON_SEGMENTS: usize = 100;

/// Sample points along ribbon `index` at animation time `time`.
///
/// Each ribbon loops twice around the canvas center while bobbing vertically;
/// outer ribbons are wider and taller.
pub fn ribbon_points(index: usize, time: f32, width: f32, height: f32) -> [Vec2; RIBBON_SEGMENTS + 1] {
    let center = Vec2::new(width / 2.0, height / 2.0);
    let i = index as f32;
    let radius = 200.0 + i * 50.0;
    let height_variation = 100.0 + i * 30.0;
    let bob = (time * 0.0075 + i).sin() * 50.0;
    let mut points = [Vec2::ZERO; RIBBON_SEGMENTS + 1];
    for (j, p) in points.iter_mut().enumerate() {
        let angle = (j as f32 / RIBBON_SEGMENTS as f32) * std::f32::consts::PI * 4.0 + time * 0.0075 + i * 0.5;
        *p = Vec2::new(
            center.x + angle.cos() * radius,
            center.y + (angle * 2.0 + time * 0.015).sin() * height_variation + bob,
        );
    }
    points
}

/// Quadratic segments `(control, end)` smoothing `points`: each control is
/// a sample and each end is the midpoint to the next sample.
pub fn ribbon_curve(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (1..n.saturating_sub(2)).map(move |j| (points[j + 1], (points[j + 1] + points[j + 2]) * 0.5))
}

/// Gradient stops `(offset, rgb, alpha)`; ribbons fade as the index grows.
pub fn ribbon_stops(index: usize) -> [(f32, [u8; 3], f32); 3] {
    let i = index as f32;
    [
        (0.0, [110, 231, 183], (0.25 - i * 0.07).max(0.0)),
        (0.5, [16, 185, 129], (0.20 - i * 0.06).max(0.0)),
        (1.0, [5, 150, 105], (0.18 - i * 0.05).max(0.0)),
    ]
}

/// Ribbon animation time at `elapsed_sec` (0.75 units per 60 Hz frame).
#[inline]
pub fn ribbon_time(elapsed_sec: f32) -> f32 {
    elapsed_sec * RIBBON_TIME_PER_SEC
}

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha)
}

/// Hero background canvas drawn with the 2D context.
pub struct RibbonCanvas {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl RibbonCanvas {
    pub fn new(window: web::Window, canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected 2d context: {:?}", e))?;
        Ok(Self { window, canvas, ctx })
    }

    /// The canvas backing store tracks the window size.
    fn sync_size(&self) {
        let (w, h) = crate::dom::inner_size(&self.window);
        let (w, h) = (w.max(1.0) as u32, h.max(1.0) as u32);
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
    }

    pub fn draw(&self, elapsed_sec: f32) {
        // Hero scrolled out of view
        if self.canvas.get_bounding_client_rect().bottom() <= 0.0 {
            return;
        }
        self.sync_size();
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        let time = ribbon_time(elapsed_sec);
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_line_width(RIBBON_LINE_WIDTH);
        for i in 0..RIBBON_COUNT {
            let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
            for (offset, rgb, alpha) in ribbon_stops(i) {
                let _ = gradient.add_color_stop(offset, &rgba(rgb, alpha));
            }
            ctx.set_stroke_style_canvas_gradient(&gradient);

            let points = ribbon_points(i, time, w as f32, h as f32);
            ctx.begin_path();
            ctx.move_to(points[0].x as f64, points[0].y as f64);
            for (c, end) in ribbon_curve(&points) {
                ctx.quadratic_curve_to(c.x as f64, c.y as f64, end.x as f64, end.y as f64);
            }
            ctx.set_shadow_blur(RIBBON_GLOW_BLUR);
            ctx.set_shadow_color(RIBBON_GLOW_COLOR);
            ctx.stroke();
            ctx.set_shadow_blur(0.0);
        }
    }
}
