//! Optimal reciprocal collision avoidance (ORCA) for 2-D disc agents.
//!
//! Given a snapshot of agents (position, velocity, radius, max speed,
//! preferred velocity), [`step`] computes for every agent a new velocity that
//! is as close as possible to its preferred velocity, lies within its
//! max-speed disc, and (assuming every other agent runs the same procedure)
//! avoids all pairwise collisions within a lookahead horizon τ.
//!
//! The two load-bearing pieces:
//! - [`vo`]: per agent pair, the truncated-cone velocity obstacle and the ORCA
//!   half-plane derived from its minimum translation vector.
//! - [`solver`]: an incremental 2-D linear program over those half-planes,
//!   with a penetration-depth fallback when the constraints turn infeasible.
//!
//! The neighbour search stays outside the crate: callers supply any spatial
//! index behind the [`index::NeighbourQuery`] capability. [`scenario`] holds
//! serde-backed agent records, seeded generators and a brute-force index for
//! tests, benches and examples.

pub mod agent;
pub mod error;
pub mod geometry;
pub mod index;
pub mod replay;
pub mod scenario;
pub mod solver;
pub mod step;
pub mod vo;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Align call sites with the 2-D vector notation used throughout.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::agent::Agent;
    pub use crate::error::{GeometryError, StepError};
    pub use crate::geometry::{HalfPlane, Tolerance};
    pub use crate::index::NeighbourQuery;
    pub use crate::solver::{optimize, solve, Infeasible, Solution};
    pub use crate::step::{conservative_radius, step, Mutation, Options};
    pub use crate::vo::{Cone, Domain, VoCfg};
    pub use crate::Vec2;
}

pub use step::{step, Mutation, Options};
