//! Turns a continuous pointer path into discrete seed positions.

use glam::Vec2;

/// Normalised pointer input in surface-pixel coordinates.
///
/// Mouse and touch adapters both reduce to this three-event stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Start(Vec2),
    Move(Vec2),
    End,
}

/// Distance-samples a drag into crystal seed positions.
///
/// A seed is planted immediately on [`PointerEvent::Start`], then each time
/// the travelled distance since the last seed reaches `spawn_distance`. The
/// accumulator restarts from zero at each seed: travel beyond the threshold
/// is discarded rather than carried over, so fast strokes plant slightly
/// fewer seeds than a fixed-pitch sampler would.
#[derive(Debug, Clone)]
pub struct SeedSampler {
    spawn_distance: f32,
    drawing: bool,
    last: Option<Vec2>,
    travelled: f32,
}

impl SeedSampler {
    pub fn new(spawn_distance: f32) -> Self {
        Self {
            spawn_distance,
            drawing: false,
            last: None,
            travelled: 0.0,
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[inline]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last
    }

    /// Feeds one pointer event; returns where to plant a seed, if anywhere.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Vec2> {
        match event {
            PointerEvent::Start(p) => {
                self.drawing = true;
                self.travelled = 0.0;
                self.last = Some(p);
                Some(p)
            }
            PointerEvent::Move(p) => self.move_to(p),
            PointerEvent::End => {
                self.drawing = false;
                self.last = None;
                None
            }
        }
    }

    fn move_to(&mut self, p: Vec2) -> Option<Vec2> {
        if !self.drawing {
            return None;
        }
        let last = self.last.replace(p)?;

        self.travelled += last.distance(p);
        if self.travelled >= self.spawn_distance {
            self.travelled = 0.0;
            Some(p)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_plants_immediately() {
        let mut s = SeedSampler::new(10.0);
        assert_eq!(s.handle(PointerEvent::Start(Vec2::new(3.0, 4.0))), Some(Vec2::new(3.0, 4.0)));
        assert!(s.is_drawing());
        assert_eq!(s.last_position(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn straight_drag_plants_one_plus_floor_of_distance() {
        let mut s = SeedSampler::new(4.0);
        let mut seeds = 0;
        if s.handle(PointerEvent::Start(Vec2::ZERO)).is_some() {
            seeds += 1;
        }
        for i in 1..=10 {
            if s.handle(PointerEvent::Move(Vec2::new(i as f32, 0.0))).is_some() {
                seeds += 1;
            }
        }
        // D = 10, T = 4.
        assert_eq!(seeds, 1 + 2);
    }

    #[test]
    fn reaching_threshold_exactly_plants() {
        let mut s = SeedSampler::new(5.0);
        s.handle(PointerEvent::Start(Vec2::ZERO));
        assert_eq!(s.handle(PointerEvent::Move(Vec2::new(3.0, 4.0))), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut s = SeedSampler::new(4.0);
        s.handle(PointerEvent::Start(Vec2::ZERO));

        assert!(s.handle(PointerEvent::Move(Vec2::new(7.0, 0.0))).is_some());
        // 3 more pixels would cross 4 if the overshoot of 3 had been kept.
        assert!(s.handle(PointerEvent::Move(Vec2::new(10.0, 0.0))).is_none());
        assert!(s.handle(PointerEvent::Move(Vec2::new(11.0, 0.0))).is_some());
    }

    #[test]
    fn last_position_tracks_every_move() {
        let mut s = SeedSampler::new(100.0);
        s.handle(PointerEvent::Start(Vec2::ZERO));
        s.handle(PointerEvent::Move(Vec2::new(1.0, 1.0)));
        assert_eq!(s.last_position(), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut s = SeedSampler::new(1.0);
        assert!(s.handle(PointerEvent::Move(Vec2::new(50.0, 0.0))).is_none());
        assert!(!s.is_drawing());
        assert_eq!(s.last_position(), None);
    }

    #[test]
    fn end_is_idempotent_and_never_plants() {
        let mut s = SeedSampler::new(1.0);
        s.handle(PointerEvent::Start(Vec2::ZERO));
        assert!(s.handle(PointerEvent::End).is_none());
        assert!(s.handle(PointerEvent::End).is_none());
        assert!(!s.is_drawing());
        assert_eq!(s.last_position(), None);
        assert!(s.handle(PointerEvent::Move(Vec2::new(9.0, 0.0))).is_none());
    }

    #[test]
    fn restart_resets_accumulator() {
        let mut s = SeedSampler::new(4.0);
        s.handle(PointerEvent::Start(Vec2::ZERO));
        s.handle(PointerEvent::Move(Vec2::new(3.0, 0.0)));
        s.handle(PointerEvent::End);

        s.handle(PointerEvent::Start(Vec2::new(100.0, 0.0)));
        assert!(s.handle(PointerEvent::Move(Vec2::new(102.0, 0.0))).is_none());
    }
}
