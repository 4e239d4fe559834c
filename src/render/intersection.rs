use crate::math::{point::Point, vector::Vector};

/// Object-space roots below this are rejected.
/// Keeps a ray leaving a surface from hitting that same surface again.
pub const SELF_INTERSECTION_EPSILON: f64 = 1.0e-4;

/// Padding applied to the extent of bounded primitives,
/// so hits exactly on an edge don't flicker with roundoff.
pub const BOUNDS_EPSILON: f64 = 1.0e-4;

/// Distance along a ray, `+∞` when there is nothing to hit.
pub const NO_HIT: f64 = f64::INFINITY;

/// Maps a candidate object-space root to itself, or to [`NO_HIT`]
/// when it lies behind the self-intersection guard or is not a number at all.
pub fn accept_root(t: f64) -> f64 {
    if t.is_finite() && t >= SELF_INTERSECTION_EPSILON {
        t
    } else {
        NO_HIT
    }
}

/// Result of intersecting a world-space ray with a single primitive.
///
/// `p_w` and `n_w` only carry meaning when `t_w` is finite;
/// check [`IntersectionValues::is_hit`] before reading them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionValues {
    /// Distance along the world-space ray, in units of its (unnormalized) direction.
    pub t_w: f64,
    /// World-space hit point.
    pub p_w: Point,
    /// World-space unit surface normal.
    pub n_w: Vector,
}

impl Default for IntersectionValues {
    fn default() -> Self {
        Self::miss()
    }
}

impl IntersectionValues {
    pub fn new(t_w: f64, p_w: Point, n_w: Vector) -> Self {
        Self { t_w, p_w, n_w }
    }

    pub fn miss() -> Self {
        Self::new(NO_HIT, Point::zero(), Vector::zero())
    }

    pub fn is_hit(&self) -> bool {
        self.t_w.is_finite()
    }

    pub fn hit(self) -> Option<Self> {
        self.is_hit().then_some(self)
    }

    /// Nearest-hit ordering; a miss is never closer than anything.
    pub fn is_closer_than(&self, other: &Self) -> bool {
        self.is_hit() && self.t_w < other.t_w
    }
}
