use crate::types::{Rgb, Span};
use std::f32::consts::FRAC_PI_3;

/// Tunable constants for seeding, growth and forking.
///
/// [`Config::default`] is the configuration the application runs with;
/// tests override individual fields to pin down exact scenarios.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Pixels every live branch advances per frame.
    pub growth_per_frame: f32,
    /// Pointer travel between two planted seeds while drawing.
    pub spawn_distance: f32,

    /// Depth budget given to root arms.
    pub max_depth: u32,
    /// Inclusive bounds for the number of arms in a crystal.
    pub min_arms: u32,
    pub max_arms: u32,
    /// Maximum angular deviation of an arm from even spacing (radians).
    pub arm_jitter: f32,
    /// Magnitude of a root arm's curl rate (radians per pixel).
    pub arm_curl: Span,
    pub arm_length: Span,
    /// First fork of a root arm, as a fraction of its length.
    pub arm_fork_fraction: Span,
    pub base_opacity: f32,
    pub base_width: f32,

    /// Probability that a fork spawns children on both sides.
    pub bilateral_chance: f32,
    /// Mean angle between parent heading and child heading.
    pub fork_spread: f32,
    pub fork_spread_jitter: f32,
    /// Children curl in either direction up to this rate.
    pub child_curl_max: f32,
    /// Child length as a fraction of the parent's remaining length.
    pub child_length_fraction: Span,
    /// First fork of a child, as a fraction of its own length.
    pub child_fork_fraction: Span,
    pub opacity_falloff: f32,
    pub width_falloff: f32,

    /// A fork needs strictly more than this much length left on the parent.
    pub min_fork_residual: f32,
    /// Above this remaining length a parent schedules another fork.
    pub refork_min_remaining: f32,
    pub refork_fraction: Span,

    pub ink: Rgb,
    pub background: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            growth_per_frame: 2.0,
            spawn_distance: 28.0,

            max_depth: 4,
            min_arms: 3,
            max_arms: 6,
            arm_jitter: 0.25,
            arm_curl: Span::new(0.0015, 0.0065),
            arm_length: Span::new(70.0, 150.0),
            arm_fork_fraction: Span::new(0.22, 0.42),
            base_opacity: 1.0,
            base_width: 1.6,

            bilateral_chance: 0.75,
            fork_spread: FRAC_PI_3,
            fork_spread_jitter: 0.27,
            child_curl_max: 0.012,
            child_length_fraction: Span::new(0.48, 0.70),
            child_fork_fraction: Span::new(0.28, 0.60),
            opacity_falloff: 0.72,
            width_falloff: 0.62,

            min_fork_residual: 6.0,
            refork_min_remaining: 14.0,
            refork_fraction: Span::new(0.35, 0.70),

            ink: Rgb::new(222, 240, 255),
            background: Rgb::new(8, 16, 32),
        }
    }
}
