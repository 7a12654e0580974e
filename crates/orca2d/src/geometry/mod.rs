//! Strict 2-D primitives for velocity-space geometry.
//!
//! Purpose
//! - Provide the half-plane type used by both the velocity-obstacle
//!   constructor and the linear-program solver, plus the handful of vector
//!   helpers nalgebra does not ship (2-D determinant, quarter rotations,
//!   norm clamping, eps comparisons).
//! - Keep numerics explicit: every tolerance lives in [`Tolerance`], and all
//!   operations are pure and total; degenerate inputs are handled by
//!   predicates, never by panics on the library path.

mod types;
mod util;

pub use types::{HalfPlane, Tolerance};
pub use util::{clamp_norm, det, rotate_ccw, rotate_cw, unit, within, within_vec};

#[cfg(test)]
mod tests;
