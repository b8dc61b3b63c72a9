//! Per-layer focus shaping.
//!
//! Each layer owns a [`KeyframeRange`] of scroll progress. Inside the range
//! its focus rises quickly to 1, holds, and falls back to 0 at the end; outside
//! it is 0. All four focus values are produced together by
//! [`FocusController::evaluate`] so a frame never mixes progress readings.

use crate::constants::{FOCUS_RAMP_FRACTION, LAYER_COUNT, LAYER_RANGES};
use crate::timeline::{Timeline, TimelineError};

/// Interval of scroll progress during which a layer is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeRange {
    start: f32,
    end: f32,
}

impl KeyframeRange {
    /// `start == end` is accepted and produces a step-shaped focus.
    pub fn new(start: f32, end: f32) -> Result<Self, TimelineError> {
        if !start.is_finite() {
            return Err(TimelineError::NonFinite { index: 0 });
        }
        if !end.is_finite() {
            return Err(TimelineError::NonFinite { index: 1 });
        }
        if end < start {
            return Err(TimelineError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_degenerate(&self) -> bool {
        self.len() <= f32::EPSILON
    }

    pub fn midpoint(&self) -> f32 {
        0.5 * (self.start + self.end)
    }

    #[inline]
    pub fn contains(&self, p: f32) -> bool {
        p >= self.start && p <= self.end
    }
}

/// Width of the rise and fall ramps at either end of a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RampWidth {
    /// Fraction of the range's own length.
    Fraction(f32),
    /// Fixed width in progress units.
    Absolute(f32),
}

impl Default for RampWidth {
    fn default() -> Self {
        RampWidth::Fraction(FOCUS_RAMP_FRACTION)
    }
}

impl RampWidth {
    /// Ramp width for `range`, never more than half its length.
    pub fn resolve(self, range: KeyframeRange) -> f32 {
        let len = range.len();
        let raw = match self {
            RampWidth::Fraction(f) => f * len,
            RampWidth::Absolute(w) => w,
        };
        if raw.is_finite() {
            raw.clamp(0.0, 0.5 * len)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug)]
enum FocusShape {
    Trapezoid(Timeline<f32>),
    // 0 below, 1 at or above
    Step(f32),
}

impl FocusShape {
    fn build(range: KeyframeRange, ramp: RampWidth) -> Result<Self, TimelineError> {
        if range.is_degenerate() {
            return Ok(FocusShape::Step(range.start));
        }
        let r = ramp.resolve(range);
        let (s, e) = (range.start, range.end);
        Timeline::new(&[s, s + r, e - r, e], &[0.0, 1.0, 1.0, 0.0]).map(FocusShape::Trapezoid)
    }

    #[inline]
    fn sample(&self, p: f32) -> f32 {
        match self {
            FocusShape::Trapezoid(t) => t.sample(p).clamp(0.0, 1.0),
            FocusShape::Step(at) => {
                if p >= *at {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Focus values for every layer at one progress reading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FocusSet(pub [f32; LAYER_COUNT]);

impl FocusSet {
    pub fn get(&self, layer: usize) -> f32 {
        self.0.get(layer).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Clone, Debug)]
pub struct FocusController {
    ranges: [KeyframeRange; LAYER_COUNT],
    shapes: [FocusShape; LAYER_COUNT],
}

impl FocusController {
    pub fn new(ranges: [KeyframeRange; LAYER_COUNT], ramp: RampWidth) -> Result<Self, TimelineError> {
        let shapes = [
            FocusShape::build(ranges[0], ramp)?,
            FocusShape::build(ranges[1], ramp)?,
            FocusShape::build(ranges[2], ramp)?,
            FocusShape::build(ranges[3], ramp)?,
        ];
        Ok(Self { ranges, shapes })
    }

    pub fn ranges(&self) -> &[KeyframeRange; LAYER_COUNT] {
        &self.ranges
    }

    /// Focus of a single layer; out-of-range indices have no focus.
    pub fn focus(&self, layer: usize, p: f32) -> f32 {
        self.shapes.get(layer).map_or(0.0, |s| s.sample(p))
    }

    pub fn evaluate(&self, p: f32) -> FocusSet {
        FocusSet([
            self.shapes[0].sample(p),
            self.shapes[1].sample(p),
            self.shapes[2].sample(p),
            self.shapes[3].sample(p),
        ])
    }

    /// Index of the first range containing `p`, endpoints included.
    pub fn active_index(&self, p: f32) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(p))
    }
}

/// The four authored layer ranges.
pub fn default_ranges() -> [KeyframeRange; LAYER_COUNT] {
    LAYER_RANGES.map(|[start, end]| KeyframeRange { start, end })
}
