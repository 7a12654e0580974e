//! Neighbour-query capability over an external spatial index.
//!
//! The core treats neighbour search as a black box: any kd-tree, spatial
//! hash or brute-force scan works as long as it answers radius queries. The
//! query is synchronous; blocking inside an implementation stalls only the
//! agent currently being solved.

use crate::agent::Agent;

/// Radius query around one agent.
pub trait NeighbourQuery {
    type Agent: Agent;
    type Error;

    /// All agents within Euclidean distance `radius` of `ego`'s position,
    /// excluding `ego` itself.
    ///
    /// Contract:
    /// - the result order is implementation-defined but stable within a
    ///   single query;
    /// - self-exclusion is the implementation's concern; the core performs
    ///   no identity comparison, which is why the ego handle (not a bare
    ///   point) is passed in.
    fn within(&self, ego: &Self::Agent, radius: f64) -> Result<Vec<Self::Agent>, Self::Error>;
}
