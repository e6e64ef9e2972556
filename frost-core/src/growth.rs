//! The growth step: advance one branch, emit its segment, maybe fork.
//!
//! [`advance`] is pure with respect to drawing. It returns the segment the
//! branch traced this step together with any children born at a fork; the
//! caller hands segments to [`crate::render::render_segments`].

use crate::{branch::Branch, config::Config, random::RandomSource, types::Segment};
use glam::Vec2;
use tracing::warn;

/// Result of advancing a single branch.
#[derive(Debug, Default)]
pub struct Step {
    /// `None` when the branch was already terminal.
    pub segment: Option<Segment>,
    pub children: Vec<Branch>,
}

/// Advances `branch` by up to `step_size` pixels.
///
/// 1. The effective step is `min(step_size, remaining_length)`; a
///    non-positive step leaves the branch untouched.
/// 2. The heading curls through the step, and the straight segment is laid
///    along the *mean* of the old and new headings so that tight curls do
///    not pick up a systematic angular bias.
/// 3. Remaining length and fork countdown shrink by the step, and the tip
///    moves to the segment end.
/// 4. A fork fires when the countdown crosses from positive to
///    non-positive during this step, the depth budget is above 1 and more
///    than `cfg.min_fork_residual` pixels remain.
pub fn advance(
    branch: &mut Branch,
    step_size: f32,
    cfg: &Config,
    rng: &mut impl RandomSource,
) -> Step {
    let s = step_size.min(branch.remaining_length);
    if s <= 0.0 {
        return Step::default();
    }

    let new_heading = branch.heading + branch.curl_rate * s;
    let mid_heading = 0.5 * (branch.heading + new_heading);
    let from = branch.tip;
    let to = from + Vec2::from_angle(mid_heading) * s;

    let segment = Segment {
        from,
        to,
        alpha: branch.opacity,
        width: branch.stroke_width,
    };

    let fork_pending = branch.can_fork();
    branch.remaining_length = (branch.remaining_length - s).max(0.0);
    branch.distance_to_next_fork -= s;
    branch.tip = to;
    branch.heading = new_heading;

    let children = if fork_pending
        && branch.distance_to_next_fork <= 0.0
        && branch.remaining_length > cfg.min_fork_residual
    {
        fork(branch, cfg, rng)
    } else {
        Vec::new()
    };

    Step {
        segment: Some(segment),
        children,
    }
}

/// Spawns children from `parent`'s current tip and reschedules its next fork.
///
/// With probability `cfg.bilateral_chance` a child grows on each side,
/// otherwise on one randomly chosen side. Afterwards the parent either gets
/// a fresh countdown (if more than `cfg.refork_min_remaining` is left) or
/// stops forking for good.
fn fork(parent: &mut Branch, cfg: &Config, rng: &mut impl RandomSource) -> Vec<Branch> {
    let sides: &[f32] = if rng.chance(cfg.bilateral_chance) {
        &[-1.0, 1.0]
    } else if rng.chance(0.5) {
        &[-1.0]
    } else {
        &[1.0]
    };

    let mut children = Vec::with_capacity(sides.len());
    for &side in sides {
        let spread = cfg.fork_spread + rng.range(-cfg.fork_spread_jitter, cfg.fork_spread_jitter);
        let heading = parent.heading + side * spread;
        let curl_rate = rng.range(-cfg.child_curl_max, cfg.child_curl_max);
        let length = parent.remaining_length * cfg.child_length_fraction.sample(rng);
        let fork_in = length * cfg.child_fork_fraction.sample(rng);

        match Branch::new(
            parent.tip,
            heading,
            curl_rate,
            length,
            fork_in,
            parent.opacity * cfg.opacity_falloff,
            parent.stroke_width * cfg.width_falloff,
            parent.depth_budget - 1,
        ) {
            Ok(child) => children.push(child),
            Err(err) => warn!(%err, "skipping child branch"),
        }
    }

    if parent.remaining_length > cfg.refork_min_remaining {
        parent.distance_to_next_fork =
            parent.remaining_length * cfg.refork_fraction.sample(rng);
    } else {
        parent.stop_forking();
    }

    children
}
