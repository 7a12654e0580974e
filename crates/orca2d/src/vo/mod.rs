//! Truncated-cone velocity obstacles and their ORCA half-planes.
//!
//! Purpose
//! - For an ordered agent pair (A, B) and a lookahead horizon τ, derive the
//!   set of relative velocities that would collide the two discs within τ: a
//!   cone whose bottom is rounded off by the truncation circle of centre
//!   `p = (B.P − A.P) / τ` and radius `r = (A.R + B.R) / τ`. Growing τ pulls
//!   the truncation circle toward the origin and forbids more velocities.
//! - Pick the minimum translation `u` that pushes the current relative
//!   velocity out of the obstacle, split it by the responsibility weight, and
//!   return the resulting half-plane constraint on A's absolute velocity.
//!
//! The closest boundary feature (truncation arc, left leg, right leg, or
//! the collision interior) is exposed as [`Domain`] for testing. The domain
//! decides both the direction of `u` and the orientation of the half-plane
//! normal, which always points into the feasible side.

use crate::Vec2;
use rand::Rng;

use crate::agent::Agent;
use crate::error::GeometryError;
use crate::geometry::{det, rotate_ccw, unit, HalfPlane, Tolerance};
use crate::replay;

/// Substitution horizon for agents already in collision. Small enough that
/// the resolution translation dominates whatever the agents preferred.
const TAU_MIN: f64 = 1e-3;

/// Boundary feature of the obstacle closest to the current relative velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// The discs already overlap; `u` resolves the overlap within [`TAU_MIN`].
    Collision,
    /// Nearest feature is the truncation arc.
    Circle,
    Left,
    Right,
}

/// Constructor options.
#[derive(Clone, Copy, Debug)]
pub struct VoCfg {
    /// Share of `u` absorbed by the ego agent. 0.5 is reciprocal: both agents
    /// of a pair move half-way out of each other's obstacle.
    pub weight: f64,
    /// Seed for the coincident-position tie-break.
    pub seed: u64,
    pub tol: Tolerance,
}

impl Default for VoCfg {
    fn default() -> Self {
        Self {
            weight: 0.5,
            seed: 0,
            tol: Tolerance::default(),
        }
    }
}

/// Velocity obstacle of the ego agent induced by one neighbour, reduced to
/// its ORCA half-plane.
#[derive(Clone, Copy, Debug)]
pub struct Cone {
    domain: Domain,
    u: Vec2<f64>,
    plane: HalfPlane,
}

impl Cone {
    /// Build the obstacle for ego `a` against neighbour `b`.
    ///
    /// Never allocates and never fails on well-formed inputs; a non-positive
    /// `tau` or a negative radius is a programming error.
    pub fn new<A: Agent>(a: &A, b: &A, tau: f64, cfg: VoCfg) -> Result<Self, GeometryError> {
        if !(tau > 0.0) {
            return Err(GeometryError::Horizon(tau));
        }
        for radius in [a.radius(), b.radius()] {
            if radius < 0.0 {
                return Err(GeometryError::Radius(radius));
            }
        }

        let mut rel_p = b.position() - a.position();
        if rel_p.norm() < cfg.tol.eps_pos {
            // Coincident positions give the obstacle no direction at all;
            // substitute a seeded pseudorandom one so the pair separates
            // deterministically and independently of iteration order.
            rel_p = tie_break(cfg.seed, a, b) * cfg.tol.eps_pos;
        }
        let v = a.velocity() - b.velocity();
        let combined = a.radius() + b.radius();

        let p = rel_p / tau;
        let r = combined / tau;
        let w = v - p;

        let domain = classify(p, r, w);
        let (u, normal) = match domain {
            Domain::Collision => {
                // Resolve the overlap within TAU_MIN instead of tau; the
                // substitution keeps |p| > 0 so `w` cannot vanish here.
                let p = rel_p / TAU_MIN;
                let w = v - p;
                arc_translation(combined / TAU_MIN, w)
            }
            Domain::Circle => arc_translation(r, w),
            Domain::Left | Domain::Right => {
                let l = leg(p, r, domain);
                (l * l.dot(&v) - v, rotate_ccw(l))
            }
        };

        Ok(Self {
            domain,
            u,
            plane: HalfPlane::new(a.velocity() + u * cfg.weight, normal),
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Minimum translation taking the relative velocity out of the obstacle.
    pub fn u(&self) -> Vec2<f64> {
        self.u
    }

    /// ORCA constraint on the ego agent's next absolute velocity.
    pub fn plane(&self) -> HalfPlane {
        self.plane
    }
}

/// Which boundary feature of the truncated cone is closest to `w`.
fn classify(p: Vec2<f64>, r: f64, w: Vec2<f64>) -> Domain {
    if p.norm_squared() <= r * r {
        return Domain::Collision;
    }
    let wp = w.dot(&p);
    if wp < 0.0 && wp * wp > w.norm_squared() * r * r {
        return Domain::Circle;
    }
    // The exact leg boundary det(p, w) == 0 counts as Left.
    if det(p, w) >= 0.0 {
        Domain::Left
    } else {
        Domain::Right
    }
}

/// Translation out through the truncation arc, and the outward unit normal.
fn arc_translation(r: f64, w: Vec2<f64>) -> (Vec2<f64>, Vec2<f64>) {
    let n = unit(w);
    (n * (r - w.norm()), n)
}

/// Unit direction of the tangent leg from the cone apex, on the side picked
/// by `domain`.
///
/// With `L² = |p|² − r²`, rotating p onto the tangent line and rescaling by
/// `1 / |p|²` lands exactly on a unit vector, since the rotated vector has
/// norm `|p| · √(L² + r²) = |p|²`.
fn leg(p: Vec2<f64>, r: f64, domain: Domain) -> Vec2<f64> {
    let pp = p.norm_squared();
    let l = (pp - r * r).sqrt();
    match domain {
        Domain::Left => Vec2::new(p.x * l - p.y * r, p.x * r + p.y * l) / pp,
        _ => -(Vec2::new(p.x * l + p.y * r, -p.x * r + p.y * l) / pp),
    }
}

/// Seeded unit direction for a coincident pair, antisymmetric under swapping
/// the pair whenever the two snapshots differ at all.
fn tie_break<A: Agent>(seed: u64, a: &A, b: &A) -> Vec2<f64> {
    let ha = snapshot_bits(a);
    let hb = snapshot_bits(b);
    let mut rng = replay::Token {
        seed,
        index: ha ^ hb,
    }
    .to_std_rng();
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let d = Vec2::new(theta.cos(), theta.sin());
    if ha <= hb {
        d
    } else {
        -d
    }
}

/// Order-sensitive fold of one snapshot's fields into a mixer key.
fn snapshot_bits<A: Agent>(a: &A) -> u64 {
    let mut h = 0u64;
    for s in [
        a.position().x,
        a.position().y,
        a.velocity().x,
        a.velocity().y,
        a.radius(),
        a.max_speed(),
    ] {
        h = replay::mix(h ^ s.to_bits());
    }
    h
}
