//! Per-frame update of the live branch collection.
//!
//! The collection is owned by the caller and moved through [`tick`]: every
//! live branch advances once, finished branches are dropped, newborns are
//! appended, and the rebuilt collection comes back along with the segments
//! to draw this frame.

use crate::{
    branch::Branch,
    config::Config,
    growth::{self, Step},
    random::RandomSource,
    types::Segment,
};
use tracing::{debug, trace};

/// Output of one simulation frame.
#[derive(Debug, Default)]
pub struct Tick {
    /// Collection to feed into the next frame.
    pub branches: Vec<Branch>,
    /// Segments traced this frame, in branch order.
    pub segments: Vec<Segment>,
    /// Children born this frame (appended at the end of `branches`).
    pub spawned: usize,
    /// Branches that finished this frame and were dropped.
    pub retired: usize,
}

#[cfg(test)]
impl Tick {
    pub fn is_idle(&self) -> bool {
        self.branches.is_empty() && self.segments.is_empty()
    }
}

/// Advances every branch in `branches` by `cfg.growth_per_frame`.
///
/// An empty collection is a no-op. Order within the collection only affects
/// the order of the returned segments; branches never observe each other.
pub fn tick(branches: Vec<Branch>, cfg: &Config, rng: &mut impl RandomSource) -> Tick {
    if branches.is_empty() {
        return Tick::default();
    }

    let live = branches.len();
    let mut survivors = Vec::with_capacity(live);
    let mut newborn = Vec::new();
    let mut segments = Vec::with_capacity(live);

    for mut branch in branches {
        let Step { segment, children } =
            growth::advance(&mut branch, cfg.growth_per_frame, cfg, rng);
        segments.extend(segment);
        newborn.extend(children);
        if !branch.is_terminal() {
            survivors.push(branch);
        }
    }

    let retired = live - survivors.len();
    let spawned = newborn.len();
    survivors.append(&mut newborn);

    trace!(live, spawned, retired, "tick");
    if survivors.is_empty() {
        debug!("all crystals finished growing");
    }

    Tick {
        branches: survivors,
        segments,
        spawned,
        retired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        random::{RngSource, ScriptedSource},
        seed::{plant, seed_crystal},
    };
    use glam::Vec2;
    use rand::{SeedableRng, rngs::StdRng};

    fn straight(length: f32) -> Branch {
        Branch::new(Vec2::ZERO, 0.0, 0.0, length, 1.0e6, 1.0, 1.0, 1).unwrap()
    }

    #[test]
    fn empty_collection_is_idle() {
        let cfg = Config::default();
        let mut rng = ScriptedSource::constant(0.5);

        let t = tick(Vec::new(), &cfg, &mut rng);

        assert!(t.is_idle());
        assert_eq!(t.spawned, 0);
        assert_eq!(t.retired, 0);
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn every_branch_advances_once_per_tick() {
        let cfg = Config::default();
        let mut rng = ScriptedSource::constant(0.5);
        let branches = vec![straight(10.0), straight(20.0), straight(30.0)];

        let t = tick(branches, &cfg, &mut rng);

        assert_eq!(t.segments.len(), 3);
        let remaining: Vec<f32> = t.branches.iter().map(|b| b.remaining_length).collect();
        assert_eq!(remaining, vec![8.0, 18.0, 28.0]);
    }

    #[test]
    fn finished_branches_are_dropped() {
        let cfg = Config::default();
        let mut rng = ScriptedSource::constant(0.5);
        let branches = vec![straight(1.0), straight(2.0), straight(5.0)];

        let t = tick(branches, &cfg, &mut rng);

        assert_eq!(t.segments.len(), 3);
        assert_eq!(t.retired, 2);
        assert_eq!(t.branches.len(), 1);
        assert!(t.branches.iter().all(|b| b.remaining_length > 0.0));
    }

    #[test]
    fn newborns_are_appended_after_survivors() {
        let cfg = Config::default();
        let mut rng = ScriptedSource::constant(0.5);
        let parent = Branch::new(Vec2::ZERO, 0.0, 0.0, 100.0, 1.0, 1.0, 2.0, 3).unwrap();
        let branches = vec![parent, straight(50.0)];

        let t = tick(branches, &cfg, &mut rng);

        assert_eq!(t.spawned, 2);
        assert_eq!(t.branches.len(), 4);
        assert_eq!(t.branches[0].depth_budget, 3);
        assert_eq!(t.branches[1].depth_budget, 1);
        assert!(t.branches[2..].iter().all(|b| b.depth_budget == 2));
        // Newborns have not grown yet.
        assert_eq!(t.segments.len(), 2);
    }

    #[test]
    fn resumes_after_idle_when_seeded() {
        let cfg = Config::default();
        let mut rng = RngSource::new(StdRng::seed_from_u64(5));

        let idle = tick(Vec::new(), &cfg, &mut rng);
        let mut live = idle.branches;
        plant(&mut live, Vec2::new(40.0, 40.0), &cfg, &mut rng);
        let arms = live.len();

        let t = tick(live, &cfg, &mut rng);

        assert_eq!(t.segments.len(), arms);
        assert!(t.segments.iter().all(|s| s.from == Vec2::new(40.0, 40.0)));
    }

    #[test]
    fn crystal_grows_to_completion_with_one_segment_per_step() {
        let cfg = Config::default();
        let step = cfg.growth_per_frame;
        let mut rng = RngSource::new(StdRng::seed_from_u64(2024));

        let mut live = seed_crystal(Vec2::new(100.0, 100.0), &cfg, &mut rng);
        let mut created = live.len();
        let mut expected_segments: usize = live
            .iter()
            .map(|b| (b.remaining_length / step).ceil() as usize)
            .sum();
        let mut drawn = 0usize;
        let mut frames = 0usize;

        while !live.is_empty() {
            let t = tick(live, &cfg, &mut rng);
            frames += 1;
            assert!(frames < 10_000, "crystal did not converge");

            drawn += t.segments.len();
            created += t.spawned;
            let born = &t.branches[t.branches.len() - t.spawned..];
            expected_segments += born
                .iter()
                .map(|b| (b.remaining_length / step).ceil() as usize)
                .sum::<usize>();
            for b in born {
                assert!(b.depth_budget >= 1);
                assert!(b.depth_budget < cfg.max_depth);
            }
            assert!(t.branches.iter().all(|b| !b.is_terminal()));

            live = t.branches;
        }

        assert!(created > 0);
        assert_eq!(drawn, expected_segments);
    }

    #[test]
    fn same_seed_reproduces_the_same_frames() {
        let cfg = Config::default();
        let run = |seed: u64| {
            let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
            let mut live = seed_crystal(Vec2::new(10.0, 10.0), &cfg, &mut rng);
            let mut segments = Vec::new();
            while !live.is_empty() {
                let t = tick(live, &cfg, &mut rng);
                segments.extend(t.segments);
                live = t.branches;
            }
            segments
        };

        assert_eq!(run(77), run(77));
    }
}
