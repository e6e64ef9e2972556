use glam::Vec2;
use thiserror::Error;

/// Countdown value that can never reach zero; disables further forking.
pub const NEVER_FORK: f32 = f32::INFINITY;

/// Reasons [`Branch::new`] rejects its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BranchError {
    #[error("branch field `{0}` is not a finite number")]
    NotFinite(&'static str),
    #[error("branch length must be positive, got {0}")]
    NonPositiveLength(f32),
    #[error("stroke width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("depth budget must be at least 1")]
    ZeroDepth,
}

/// The growth unit of a crystal.
///
/// A branch is created either as a root arm (see [`crate::seed`]) or as a
/// child at a fork (see [`crate::growth`]), mutated once per frame by
/// [`crate::growth::advance`] and dropped from the live collection the
/// frame its `remaining_length` reaches zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Current growth front, in surface pixels.
    pub tip: Vec2,
    /// Direction of travel in radians. Accumulates without wrapping.
    pub heading: f32,
    /// Signed heading change per pixel advanced.
    pub curl_rate: f32,
    /// Pixels left to grow. Never negative.
    pub remaining_length: f32,
    /// Pixels until the next fork; [`NEVER_FORK`] once forking is over.
    pub distance_to_next_fork: f32,
    pub opacity: f32,
    pub stroke_width: f32,
    /// Remaining levels of forking for this branch and its descendants.
    pub depth_budget: u32,
}

impl Branch {
    /// Builds a validated branch.
    ///
    /// All numeric inputs must be finite, `length` and `stroke_width` must
    /// be strictly positive and `depth_budget` must be at least 1.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tip: Vec2,
        heading: f32,
        curl_rate: f32,
        length: f32,
        fork_in: f32,
        opacity: f32,
        stroke_width: f32,
        depth_budget: u32,
    ) -> Result<Self, BranchError> {
        let fields = [
            ("tip.x", tip.x),
            ("tip.y", tip.y),
            ("heading", heading),
            ("curl_rate", curl_rate),
            ("length", length),
            ("fork_in", fork_in),
            ("opacity", opacity),
            ("stroke_width", stroke_width),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BranchError::NotFinite(name));
        }
        if length <= 0.0 {
            return Err(BranchError::NonPositiveLength(length));
        }
        if stroke_width <= 0.0 {
            return Err(BranchError::NonPositiveWidth(stroke_width));
        }
        if depth_budget == 0 {
            return Err(BranchError::ZeroDepth);
        }

        Ok(Self {
            tip,
            heading,
            curl_rate,
            remaining_length: length,
            distance_to_next_fork: fork_in,
            opacity: opacity.clamp(0.0, 1.0),
            stroke_width,
            depth_budget,
        })
    }

    /// `true` once the branch has nothing left to grow.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.remaining_length <= 0.0
    }

    /// Whether a fork is still ahead of this branch.
    ///
    /// Forks fire only when a positive countdown runs out, so a spent or
    /// disabled countdown means no more children, whatever the depth.
    #[inline]
    pub fn can_fork(&self) -> bool {
        self.depth_budget > 1
            && self.distance_to_next_fork > 0.0
            && self.distance_to_next_fork.is_finite()
    }

    /// Permanently stops this branch from forking; it keeps growing.
    #[inline]
    pub fn stop_forking(&mut self) {
        self.distance_to_next_fork = NEVER_FORK;
    }
}
