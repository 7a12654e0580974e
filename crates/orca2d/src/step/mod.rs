//! Per-snapshot orchestrator.
//!
//! One call to [`step`] turns a read-only agent snapshot plus a neighbour
//! index into a velocity mutation per participating agent: query neighbours,
//! build one ORCA half-plane per neighbour in query order, solve the linear
//! program, emit. Nothing is written back; the caller applies mutations
//! between steps.
//!
//! Each agent's computation reads only the pre-step snapshot, so the emitted
//! set is a function of the snapshot alone and per-agent work may be
//! partitioned across threads freely; this implementation runs sequentially
//! and checks the caller's cancellation signal between agents.

use crate::Vec2;
use tracing::{debug, trace};

use crate::agent::Agent;
use crate::error::{GeometryError, StepError};
use crate::index::NeighbourQuery;
use crate::solver;
use crate::vo::{Cone, VoCfg};

/// One agent's outcome: the velocity to adopt for the next tick, and whether
/// the primary program (rather than the penetration fallback) produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mutation<A> {
    pub agent: A,
    pub velocity: Vec2<f64>,
    pub feasible: bool,
}

/// Step inputs.
///
/// `filter` decides which agents participate; `query_radius` maps the
/// horizon to a neighbour-search radius (see [`conservative_radius`]);
/// `cancelled` is polled between agents; on cancellation the partial
/// mutation list is returned without error.
pub struct Options<'a, Q, F, R, C>
where
    Q: NeighbourQuery,
{
    pub snapshot: &'a [Q::Agent],
    pub index: &'a Q,
    pub horizon: f64,
    pub filter: F,
    pub query_radius: R,
    pub cancelled: C,
    pub vo: VoCfg,
}

/// Compute one velocity mutation per participating agent.
pub fn step<Q, F, R, C>(
    o: Options<'_, Q, F, R, C>,
) -> Result<Vec<Mutation<Q::Agent>>, StepError<Q::Error>>
where
    Q: NeighbourQuery,
    F: Fn(&Q::Agent) -> bool,
    R: Fn(f64) -> f64,
    C: Fn() -> bool,
{
    if !(o.horizon > 0.0) {
        return Err(GeometryError::Horizon(o.horizon).into());
    }
    let radius = (o.query_radius)(o.horizon);
    debug!(
        agents = o.snapshot.len(),
        horizon = o.horizon,
        radius,
        "step"
    );

    let mut mutations = Vec::with_capacity(o.snapshot.len());
    for agent in o.snapshot {
        if (o.cancelled)() {
            debug!(done = mutations.len(), "step cancelled, returning partial");
            return Ok(mutations);
        }
        if !(o.filter)(agent) {
            continue;
        }

        let neighbours = o.index.within(agent, radius).map_err(StepError::Index)?;
        let mut planes = Vec::with_capacity(neighbours.len());
        for other in &neighbours {
            planes.push(Cone::new(agent, other, o.horizon, o.vo)?.plane());
        }

        let solution = solver::solve(&planes, agent.preferred_velocity(), agent.max_speed());
        trace!(
            constraints = planes.len(),
            feasible = solution.feasible,
            "agent solved"
        );
        mutations.push(Mutation {
            agent: agent.clone(),
            velocity: solution.velocity,
            feasible: solution.feasible,
        });
    }
    Ok(mutations)
}

/// Query radius wide enough to catch every agent whose obstacle could bind
/// within the horizon: `tau * max_speed + max_radius` over the population.
pub fn conservative_radius(max_speed: f64, max_radius: f64) -> impl Fn(f64) -> f64 {
    move |tau| tau * max_speed + max_radius
}
