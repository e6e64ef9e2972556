use crate::random::RandomSource;
use glam::Vec2;

/// Closed numeric interval sampled uniformly by the generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draws a value in `[min, max)` from `rng`.
    #[inline]
    pub fn sample(&self, rng: &mut impl RandomSource) -> f32 {
        rng.range(self.min, self.max)
    }

    #[cfg(test)]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Opaque 8-bit colour used for ink and background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One straight piece of a branch, produced by a single growth step.
///
/// `to` is always the tip of the branch after the step, so the drawn
/// picture and the branch state never disagree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
    pub width: f32,
}

#[cfg(test)]
impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}
