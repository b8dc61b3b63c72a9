//! Piecewise-linear keyframe timelines.
//!
//! A [`Timeline`] maps a scalar input (usually scroll progress) onto any value
//! that can be linearly interpolated. Inputs outside the first/last keyframe
//! clamp to the endpoint values, and keyframes sharing a position act as a
//! step, so sampling never divides by zero.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while building timelines and ranges.
///
/// Sampling is infallible; everything is validated up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("timeline needs at least one keyframe")]
    Empty,
    #[error("{positions} keyframe positions but {values} values")]
    LengthMismatch { positions: usize, values: usize },
    #[error("keyframe {index} has a non-finite position")]
    NonFinite { index: usize },
    #[error("keyframe {index} at {at} comes before its predecessor at {previous}")]
    Decreasing { index: usize, at: f32, previous: f32 },
    #[error("range end {end} is before its start {start}")]
    InvertedRange { start: f32, end: f32 },
}

/// Values that can be blended between two keyframes.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub at: f32,
    pub value: T,
}

// Every timeline in the scene has nine keyframes or fewer.
type Keyframes<T> = SmallVec<[Keyframe<T>; 9]>;

#[derive(Clone, Debug)]
pub struct Timeline<T: Lerp> {
    keyframes: Keyframes<T>,
}

impl<T: Lerp> Timeline<T> {
    /// Build a timeline from parallel position/value slices.
    ///
    /// Positions must be finite and non-decreasing. Repeated positions are
    /// allowed and produce a step at that position.
    pub fn new(positions: &[f32], values: &[T]) -> Result<Self, TimelineError> {
        if positions.len() != values.len() {
            return Err(TimelineError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }
        if positions.is_empty() {
            return Err(TimelineError::Empty);
        }
        let mut keyframes = Keyframes::with_capacity(positions.len());
        for (index, (&at, &value)) in positions.iter().zip(values).enumerate() {
            if !at.is_finite() {
                return Err(TimelineError::NonFinite { index });
            }
            if let Some(prev) = keyframes.last() {
                if at < prev.at {
                    return Err(TimelineError::Decreasing {
                        index,
                        at,
                        previous: prev.at,
                    });
                }
            }
            keyframes.push(Keyframe { at, value });
        }
        Ok(Self { keyframes })
    }

    /// Two-keyframe mapping of `[from.0, to.0]` onto `[from.1, to.1]`.
    pub fn linear(from: (f32, T), to: (f32, T)) -> Result<Self, TimelineError> {
        Self::new(&[from.0, to.0], &[from.1, to.1])
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    pub fn first(&self) -> Keyframe<T> {
        self.keyframes[0]
    }

    pub fn last(&self) -> Keyframe<T> {
        self.keyframes[self.keyframes.len() - 1]
    }

    /// Sample the timeline at `p`.
    pub fn sample(&self, p: f32) -> T {
        let first = self.first();
        // NaN fails this comparison too and lands on the first value
        if !(p > first.at) {
            return first.value;
        }
        let last = self.last();
        if p >= last.at {
            return last.value;
        }
        // Last keyframe at or before p; its successor lies strictly after p.
        let i = self.keyframes.partition_point(|k| k.at <= p) - 1;
        let a = self.keyframes[i];
        let b = self.keyframes[i + 1];
        let span = b.at - a.at;
        if span <= f32::EPSILON {
            return b.value;
        }
        T::lerp(a.value, b.value, (p - a.at) / span)
    }
}
