//! Incremental 2-D linear program over half-plane constraints.
//!
//! Purpose
//! - Minimise `|v - target|²` subject to `|v| <= max_speed` and an ordered
//!   list of half-planes, refining one candidate velocity as constraints are
//!   folded in: a candidate that satisfies the next plane is kept; one that
//!   violates it is re-optimised on that plane's boundary line, clipped by
//!   the speed disc and every previously accepted plane.
//! - When the constraints turn out mutually infeasible, degrade gracefully:
//!   [`solve`] falls back to the velocity minimising the maximum penetration
//!   depth across the remaining planes, so the caller always receives a
//!   usable velocity inside the speed disc.
//!
//! [`optimize`] exposes the primary program alone and reports the index at
//! which infeasibility occurred, together with the last feasible candidate.

use crate::Vec2;
use tracing::trace;

use crate::geometry::{clamp_norm, det, rotate_ccw, unit, HalfPlane};

/// Determinant threshold below which boundary lines count as parallel.
const EPS_PARALLEL: f64 = 1e-12;

/// Solver output. `feasible` is false iff the penetration-depth fallback ran;
/// the velocity respects the speed disc either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub velocity: Vec2<f64>,
    pub feasible: bool,
}

/// Primary-program failure report: the index of the offending plane and the
/// candidate refined under the planes before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Infeasible {
    pub index: usize,
    pub partial: Vec2<f64>,
}

/// What the 1-D subproblem optimises for along a boundary line.
#[derive(Clone, Copy, Debug)]
enum Objective {
    /// Nearest point to a goal velocity (the primary program).
    Point(Vec2<f64>),
    /// Farthest along a unit direction (the penetration fallback).
    Direction(Vec2<f64>),
}

/// Run the primary program: the velocity nearest `target` within the speed
/// disc and all of `planes`, or the failure report.
///
/// The target is clamped onto the speed disc before refinement; planes are
/// processed strictly in input order.
pub fn optimize(
    planes: &[HalfPlane],
    target: Vec2<f64>,
    max_speed: f64,
) -> Result<Vec2<f64>, Infeasible> {
    refine(planes, Objective::Point(target), max_speed)
}

/// Run the primary program and, on infeasibility, the penetration-depth
/// fallback. Always yields a velocity within the speed disc.
pub fn solve(planes: &[HalfPlane], target: Vec2<f64>, max_speed: f64) -> Solution {
    match refine(planes, Objective::Point(target), max_speed) {
        Ok(velocity) => Solution {
            velocity,
            feasible: true,
        },
        Err(Infeasible { index, partial }) => {
            trace!(index, "primary program infeasible, minimising penetration");
            Solution {
                velocity: fallback(planes, index, partial, max_speed),
                feasible: false,
            }
        }
    }
}

fn refine(
    planes: &[HalfPlane],
    objective: Objective,
    max_speed: f64,
) -> Result<Vec2<f64>, Infeasible> {
    let mut v = match objective {
        Objective::Point(goal) => clamp_norm(goal, max_speed),
        Objective::Direction(dir) => dir * max_speed,
    };
    for (i, plane) in planes.iter().enumerate() {
        if plane.contains(v) {
            continue;
        }
        match project(&planes[..i], plane, objective, max_speed) {
            Some(better) => v = better,
            None => return Err(Infeasible { index: i, partial: v }),
        }
    }
    Ok(v)
}

/// 1-D subproblem on the boundary line of `plane`, clipped by the speed disc
/// and by every plane in `prior`. `None` means the clipped segment is empty.
fn project(
    prior: &[HalfPlane],
    plane: &HalfPlane,
    objective: Objective,
    max_speed: f64,
) -> Option<Vec2<f64>> {
    let d = plane.direction();
    let p = plane.point;

    // The boundary line has to cross the speed disc at all.
    let along = d.dot(&p);
    let discriminant = along * along + max_speed * max_speed - p.norm_squared();
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let mut t_left = -along - root;
    let mut t_right = -along + root;

    for other in prior {
        let od = other.direction();
        let den = det(d, od);
        let num = det(od, p - other.point);
        if den.abs() <= EPS_PARALLEL {
            // Parallel boundaries: the earlier plane either keeps this whole
            // line or rejects it whole.
            if num < 0.0 {
                return None;
            }
            continue;
        }
        let t = num / den;
        if den >= 0.0 {
            t_right = t_right.min(t);
        } else {
            t_left = t_left.max(t);
        }
        if t_left > t_right {
            return None;
        }
    }

    let t = match objective {
        Objective::Point(goal) => d.dot(&(goal - p)).clamp(t_left, t_right),
        Objective::Direction(dir) => {
            if dir.dot(&d) > 0.0 {
                t_right
            } else {
                t_left
            }
        }
    };
    Some(p + d * t)
}

/// Minimise the maximum penetration depth over `planes[begin..]`.
///
/// Walks the planes in order, tracking the depth `d` of the worst violation
/// so far. A plane violated beyond `d` pulls the candidate onto the locus
/// where its penetration matches each earlier plane's (each earlier
/// half-plane relaxed by the current depth), as far out of the violated
/// plane as the speed disc allows. Depth only grows, and the disc is
/// compact, so the walk always lands on a velocity.
fn fallback(
    planes: &[HalfPlane],
    begin: usize,
    start: Vec2<f64>,
    max_speed: f64,
) -> Vec2<f64> {
    let mut v = start;
    let mut depth = 0.0;
    for (i, plane) in planes.iter().enumerate().skip(begin) {
        if plane.violation(v) <= depth {
            continue;
        }
        let d_i = plane.direction();
        let mut level = Vec::with_capacity(i - begin);
        for other in &planes[begin..i] {
            let d_j = other.direction();
            let den = det(d_i, d_j);
            let point = if den.abs() <= EPS_PARALLEL {
                if d_i.dot(&d_j) > 0.0 {
                    // Same orientation: the violated plane supersedes it.
                    continue;
                }
                (plane.point + other.point) * 0.5
            } else {
                plane.point + d_i * (det(d_j, plane.point - other.point) / den)
            };
            level.push(HalfPlane::new(point, rotate_ccw(unit(d_j - d_i))));
        }
        if let Ok(better) = refine(&level, Objective::Direction(plane.normal), max_speed) {
            v = better;
        }
        depth = depth.max(plane.violation(v));
    }
    v
}
