//! Half-plane constraints and the tolerance configuration.
//!
//! - `Tolerance`: centralizes the epsilons for unit-normal invariants,
//!   feasibility slack, parallel-line detection and coincident positions.
//! - `HalfPlane`: `(point, normal)` with unit normal; the feasible side is
//!   `{ v : (v - point) · normal >= 0 }`.

use crate::Vec2;

use super::util::{rotate_cw, within, within_vec};

/// Numeric tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    /// Unit-normal invariant slack.
    pub eps_unit: f64,
    /// Feasibility slack for satisfied-constraint checks.
    pub eps_feas: f64,
    /// Coincident-position threshold in the VO constructor.
    pub eps_pos: f64,
    /// Default slack for test comparisons.
    pub eps_test: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            eps_unit: 1e-15,
            eps_feas: 1e-9,
            eps_pos: 1e-10,
            eps_test: 1e-10,
        }
    }
}

/// Half-plane `(point, normal)` in velocity space.
///
/// Invariants:
/// - `normal` is unit length.
/// - The feasible side lies in the direction of `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub point: Vec2<f64>,
    pub normal: Vec2<f64>,
}

impl HalfPlane {
    /// A non-unit normal is a programming error.
    pub fn new(point: Vec2<f64>, normal: Vec2<f64>) -> Self {
        debug_assert!(
            within(normal.norm(), 1.0, Tolerance::default().eps_unit),
            "half-plane normal must be unit length, got |n| = {}",
            normal.norm()
        );
        Self { point, normal }
    }

    /// Boundary direction: `normal` rotated −π/2, so the feasible side lies to
    /// the left of the direction.
    #[inline]
    pub fn direction(&self) -> Vec2<f64> {
        rotate_cw(self.normal)
    }

    #[inline]
    pub fn contains(&self, v: Vec2<f64>) -> bool {
        self.contains_eps(v, 0.0)
    }

    /// Membership with slack; `eps > 0` enlarges the feasible side.
    #[inline]
    pub fn contains_eps(&self, v: Vec2<f64>, eps: f64) -> bool {
        (v - self.point).dot(&self.normal) >= -eps
    }

    /// Penetration depth of `v`; positive iff `v` is infeasible.
    #[inline]
    pub fn violation(&self, v: Vec2<f64>) -> f64 {
        -(v - self.point).dot(&self.normal)
    }

    /// Same boundary line and same orientation, up to `eps`.
    pub fn coincident(a: HalfPlane, b: HalfPlane, eps: f64) -> bool {
        within_vec(a.normal, b.normal, eps) && within((b.point - a.point).dot(&a.normal), 0.0, eps)
    }
}
