//! Read-only agent capability.
//!
//! The core never owns agents; it reads one immutable snapshot per step and
//! emits velocity mutations for the caller to apply between steps. No
//! identity operation is required here; callers and index implementations
//! keep their own identity scheme.

use crate::Vec2;

/// Snapshot view of one disc agent.
///
/// `Clone` lets the step orchestrator hand the queried agent back inside its
/// mutation without borrowing from the snapshot.
pub trait Agent: Clone {
    fn position(&self) -> Vec2<f64>;
    fn velocity(&self) -> Vec2<f64>;
    /// Disc radius, non-negative.
    fn radius(&self) -> f64;
    /// Speed cap, non-negative.
    fn max_speed(&self) -> f64;
    /// The velocity the agent would pick with nobody else around.
    fn preferred_velocity(&self) -> Vec2<f64>;
}
