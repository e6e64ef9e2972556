use crate::{branch::Branch, config::Config, random::RandomSource};
use glam::Vec2;
use std::f32::consts::TAU;
use tracing::{debug, warn};

/// Generates the root arms of a new crystal centred on `origin`.
///
/// Between `cfg.min_arms` and `cfg.max_arms` arms are spaced evenly around
/// the circle, each nudged by up to `cfg.arm_jitter` radians. Every arm
/// draws its own curl direction and magnitude, length and first fork
/// distance, and starts at full opacity, base width and maximum depth.
pub fn seed_crystal(origin: Vec2, cfg: &Config, rng: &mut impl RandomSource) -> Vec<Branch> {
    let arms = arm_count(cfg, rng);
    let spacing = TAU / arms as f32;

    let mut branches = Vec::with_capacity(arms as usize);
    for i in 0..arms {
        let heading = i as f32 * spacing + rng.range(-cfg.arm_jitter, cfg.arm_jitter);
        let curl_rate = rng.sign() * cfg.arm_curl.sample(rng);
        let length = cfg.arm_length.sample(rng);
        let fork_in = length * cfg.arm_fork_fraction.sample(rng);

        match Branch::new(
            origin,
            heading,
            curl_rate,
            length,
            fork_in,
            cfg.base_opacity,
            cfg.base_width,
            cfg.max_depth,
        ) {
            Ok(branch) => branches.push(branch),
            Err(err) => warn!(%err, "skipping crystal arm"),
        }
    }

    debug!(arms, x = origin.x, y = origin.y, "seeded crystal");
    branches
}

/// Appends a freshly seeded crystal to the live collection.
pub fn plant(branches: &mut Vec<Branch>, origin: Vec2, cfg: &Config, rng: &mut impl RandomSource) {
    branches.extend(seed_crystal(origin, cfg, rng));
}

fn arm_count(cfg: &Config, rng: &mut impl RandomSource) -> u32 {
    let choices = cfg.max_arms.saturating_sub(cfg.min_arms) + 1;
    let pick = (rng.next_f32() * choices as f32) as u32;
    (cfg.min_arms + pick).min(cfg.max_arms)
}
