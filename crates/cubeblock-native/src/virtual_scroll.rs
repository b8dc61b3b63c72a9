use cubeblock_core::scroll::{progress, ScrollMetrics, ScrollOffsets, ScrollProgress};

/// Stand-in for the web page: a container `page_screens` viewports tall
/// whose top starts at the top of the window.
#[derive(Clone, Copy, Debug)]
pub struct VirtualScroll {
    scroll_y: f32,
    viewport_height: f32,
    page_screens: f32,
}

impl VirtualScroll {
    pub fn new(viewport_height: f32, page_screens: f32) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: viewport_height.max(1.0),
            page_screens: page_screens.max(1.0),
        }
    }

    pub fn container_height(&self) -> f32 {
        self.viewport_height * self.page_screens
    }

    pub fn max_scroll(&self) -> f32 {
        (self.container_height() - self.viewport_height).max(0.0)
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn scroll_by(&mut self, dy: f32) {
        if dy.is_finite() {
            self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll());
        }
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = 0.0;
        self.scroll_by(y);
    }

    /// Keep the same progress when the window height changes.
    pub fn set_viewport_height(&mut self, height: f32) {
        let max = self.max_scroll();
        let fraction = if max > 0.0 { self.scroll_y / max } else { 0.0 };
        self.viewport_height = height.max(1.0);
        self.scroll_y = fraction * self.max_scroll();
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            container_top: -self.scroll_y,
            container_height: self.container_height(),
            viewport_height: self.viewport_height,
        }
    }

    pub fn progress(&self) -> ScrollProgress {
        progress(self.metrics(), ScrollOffsets::default())
    }
}
