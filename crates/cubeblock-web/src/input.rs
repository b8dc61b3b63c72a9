use glam::Vec2;
use web_sys as web;

/// Latest pointer position, written by the pointer listener and read once
/// per frame.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub ndc: Vec2,
}

/// Map a point inside `(left, top, width, height)` to normalized device
/// coordinates: x right, y up, both in [-1, 1].
#[inline]
pub fn to_ndc(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((x - left) / width).clamp(0.0, 1.0);
    let v = ((y - top) / height).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
