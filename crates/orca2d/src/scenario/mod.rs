//! Scenario records, seeded generators and a brute-force neighbour index.
//!
//! Purpose
//! - Give tests, benches and examples a concrete world to run the core
//!   against without dragging a real spatial index into the crate: a serde
//!   record per agent (`{position, goal, radius, max_speed}`), deterministic
//!   generators driven by replay tokens, and a `Roster` that answers
//!   neighbour queries by linear scan.
//!
//! The driver derives each agent's preferred velocity from its goal; the
//! core itself never integrates positions; [`Roster::advance`] exists only
//! so demos can tick a scenario forward.

use std::convert::Infallible;

use crate::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::geometry::clamp_norm;
use crate::index::NeighbourQuery;
use crate::replay::Token;
use crate::step::Mutation;

/// On-disk agent record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub position: Vec2<f64>,
    pub goal: Vec2<f64>,
    pub radius: f64,
    pub max_speed: f64,
}

/// Pretty-printed JSON object list.
pub fn to_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

pub fn from_json(data: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str(data)
}

/// Live agent state derived from a [`Record`].
///
/// The preferred velocity re-derives from the goal as the position moves:
/// the remaining offset to the goal, capped at max speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    id: usize,
    position: Vec2<f64>,
    velocity: Vec2<f64>,
    goal: Vec2<f64>,
    radius: f64,
    max_speed: f64,
}

impl Snapshot {
    /// Roster-local identity; the core never looks at it.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn goal(&self) -> Vec2<f64> {
        self.goal
    }
}

impl Agent for Snapshot {
    fn position(&self) -> Vec2<f64> {
        self.position
    }

    fn velocity(&self) -> Vec2<f64> {
        self.velocity
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn max_speed(&self) -> f64 {
        self.max_speed
    }

    fn preferred_velocity(&self) -> Vec2<f64> {
        clamp_norm(self.goal - self.position, self.max_speed)
    }
}

/// Brute-force neighbour index over a scenario's agents.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    agents: Vec<Snapshot>,
}

impl Roster {
    pub fn new(records: &[Record]) -> Self {
        Self {
            agents: records
                .iter()
                .enumerate()
                .map(|(id, r)| Snapshot {
                    id,
                    position: r.position,
                    velocity: Vec2::zeros(),
                    goal: r.goal,
                    radius: r.radius,
                    max_speed: r.max_speed,
                })
                .collect(),
        }
    }

    pub fn snapshot(&self) -> &[Snapshot] {
        &self.agents
    }

    /// Apply a step's mutations and integrate positions by `dt`. Demo
    /// helper; the core never moves agents.
    pub fn advance(&mut self, mutations: &[Mutation<Snapshot>], dt: f64) {
        for m in mutations {
            let agent = &mut self.agents[m.agent.id];
            agent.velocity = m.velocity;
            agent.position += m.velocity * dt;
        }
    }
}

impl NeighbourQuery for Roster {
    type Agent = Snapshot;
    type Error = Infallible;

    fn within(&self, ego: &Snapshot, radius: f64) -> Result<Vec<Snapshot>, Infallible> {
        Ok(self
            .agents
            .iter()
            .filter(|b| b.id != ego.id && (b.position - ego.position).norm() <= radius)
            .cloned()
            .collect())
    }
}

/// Agents on a regular grid, each assigned a shuffled grid point as its
/// goal.
pub fn grid(
    cols: usize,
    rows: usize,
    spacing: f64,
    radius: f64,
    max_speed: f64,
    tok: Token,
) -> Vec<Record> {
    let mut rng = tok.to_std_rng();
    let positions: Vec<Vec2<f64>> = (0..cols)
        .flat_map(|i| (0..rows).map(move |j| Vec2::new(i as f64 * spacing, j as f64 * spacing)))
        .collect();
    let mut goals = positions.clone();
    goals.shuffle(&mut rng);
    positions
        .into_iter()
        .zip(goals)
        .map(|(position, goal)| Record {
            position,
            goal,
            radius,
            max_speed,
        })
        .collect()
}

/// Two agents facing each other across `2 * gap`, goals past one another.
pub fn head_on(gap: f64, radius: f64, max_speed: f64) -> Vec<Record> {
    let left = Vec2::new(-gap, 0.0);
    let right = Vec2::new(gap, 0.0);
    vec![
        Record {
            position: left,
            goal: left + Vec2::new(2.0 * gap, 0.0),
            radius,
            max_speed,
        },
        Record {
            position: right,
            goal: right + Vec2::new(-2.0 * gap, 0.0),
            radius,
            max_speed,
        },
    ]
}

/// `n` agents scattered uniformly over `[-extent, extent]²`, goals offset a
/// fifth of the extent, sizes and speeds jittered down to half the caps.
pub fn random(
    n: usize,
    extent: f64,
    radius: f64,
    max_speed: f64,
    tok: Token,
) -> Vec<Record> {
    let mut rng = tok.to_std_rng();
    let reach = extent / 5.0;
    (0..n)
        .map(|_| {
            let position = Vec2::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            );
            let offset = Vec2::new(rng.gen_range(-reach..=reach), rng.gen_range(-reach..=reach));
            Record {
                position,
                goal: position + offset,
                radius: rng.gen_range(0.5..=1.0) * radius,
                max_speed: rng.gen_range(0.5..=1.0) * max_speed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
