//! Error taxonomy.
//!
//! Invariant violations (non-positive horizon, negative radius) fail loudly
//! as errors and are never swallowed. Expected geometric conditions, such
//! as an infeasible linear program or coincident positions, are values on
//! the happy path and never surface here. Neighbour-index errors pass through
//! untouched inside [`StepError::Index`].

use thiserror::Error;

/// Programming errors caught at the VO-constructor and step boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("lookahead horizon must be positive, got {0}")]
    Horizon(f64),
    #[error("agent radius must be non-negative, got {0}")]
    Radius(f64),
}

/// Step failure: either a local invariant violation or a verbatim
/// neighbour-index error.
#[derive(Debug, Error)]
pub enum StepError<E> {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("neighbour index query failed: {0}")]
    Index(E),
}
