use crate::dom;
use cubeblock_core::scroll::{progress, ScrollMetrics, ScrollOffsets, ScrollProgress};
use web_sys as web;

/// Reads scroll progress through the tall cube container.
///
/// Geometry is sampled on demand (once per animation frame) rather than from
/// scroll events, so a frame always sees one consistent reading.
pub struct ScrollSource {
    window: web::Window,
    container: web::Element,
    offsets: ScrollOffsets,
}

impl ScrollSource {
    pub fn new(window: web::Window, container: web::Element) -> Self {
        Self {
            window,
            container,
            offsets: ScrollOffsets::default(),
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        let rect = self.container.get_bounding_client_rect();
        let (_, viewport_height) = dom::inner_size(&self.window);
        ScrollMetrics {
            container_top: rect.top() as f32,
            container_height: rect.height() as f32,
            viewport_height: viewport_height as f32,
        }
    }

    pub fn read(&self) -> ScrollProgress {
        progress(self.metrics(), self.offsets)
    }
}
