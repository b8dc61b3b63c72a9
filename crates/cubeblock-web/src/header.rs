use web_sys as web;

/// Hide-on-scroll-down rule for the page header.
#[derive(Clone, Copy, Debug)]
pub struct HeaderVisibility {
    hide_after: f64,
    last_y: f64,
    visible: bool,
}

impl HeaderVisibility {
    pub fn new(hide_after: f64) -> Self {
        Self {
            hide_after,
            last_y: 0.0,
            visible: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed a new scroll offset; returns true when visibility changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let visible = !(y > self.last_y && y > self.hide_after);
        self.last_y = y;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

pub fn apply(header: &web::Element, hidden_class: &str, visible: bool) {
    let _ = header.class_list().toggle_with_force(hidden_class, !visible);
}
