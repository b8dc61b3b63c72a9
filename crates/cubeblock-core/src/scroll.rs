//! Normalized scroll progress through a tall container.

/// Scroll fraction through the tracked container, always within [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for ScrollProgress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Edge of an element or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEdge {
    Start,
    Center,
    End,
}

impl ScrollEdge {
    #[inline]
    pub fn fraction(self) -> f32 {
        match self {
            ScrollEdge::Start => 0.0,
            ScrollEdge::Center => 0.5,
            ScrollEdge::End => 1.0,
        }
    }
}

/// "`target` edge meets `viewport` edge", e.g. `start start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOffset {
    pub target: ScrollEdge,
    pub viewport: ScrollEdge,
}

impl ScrollOffset {
    pub const fn new(target: ScrollEdge, viewport: ScrollEdge) -> Self {
        Self { target, viewport }
    }

    /// Container top (relative to the viewport) at which this offset is met.
    fn container_top(self, container_height: f32, viewport_height: f32) -> f32 {
        self.viewport.fraction() * viewport_height - self.target.fraction() * container_height
    }
}

/// Offsets marking progress 0 and progress 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOffsets {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl Default for ScrollOffsets {
    /// Track from the container's top reaching the viewport top until its
    /// bottom reaches the viewport bottom.
    fn default() -> Self {
        Self {
            start: ScrollOffset::new(ScrollEdge::Start, ScrollEdge::Start),
            end: ScrollOffset::new(ScrollEdge::End, ScrollEdge::End),
        }
    }
}

/// Container geometry in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Container top relative to the viewport top; negative once scrolled past.
    pub container_top: f32,
    pub container_height: f32,
    pub viewport_height: f32,
}

/// Progress of `metrics` between the two offsets.
///
/// When both offsets are met at the same scroll position the result steps
/// from 0 to 1 at that position.
pub fn progress(metrics: ScrollMetrics, offsets: ScrollOffsets) -> ScrollProgress {
    let h = metrics.container_height.max(0.0);
    let vh = metrics.viewport_height.max(0.0);
    let top_at_start = offsets.start.container_top(h, vh);
    let top_at_end = offsets.end.container_top(h, vh);
    let travel = top_at_start - top_at_end;
    if travel.abs() <= f32::EPSILON {
        return if metrics.container_top <= top_at_end {
            ScrollProgress::END
        } else {
            ScrollProgress::START
        };
    }
    ScrollProgress::new((top_at_start - metrics.container_top) / travel)
}
