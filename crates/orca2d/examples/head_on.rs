//! Head-on crossing probe for two reciprocal agents.
//!
//! Purpose
//! - Show the full pipeline on the classic worst case: two agents aimed
//!   straight at each other with goals past one another, so naive steering
//!   collides at the midpoint.
//! - Print the per-tick gap between the discs; it must never drop below the
//!   combined radius while both agents still make goal progress.

use orca2d::agent::Agent;
use orca2d::scenario::{self, Roster, Snapshot};
use orca2d::step::{conservative_radius, step, Options};
use orca2d::vo::VoCfg;

const RADIUS: f64 = 5.0;
const MAX_SPEED: f64 = 10.0;
const DT: f64 = 0.25;

fn main() {
    let mut roster = Roster::new(&scenario::head_on(50.0, RADIUS, MAX_SPEED));

    let mut min_gap = f64::INFINITY;
    for tick in 0..80 {
        let mutations = step(Options {
            snapshot: roster.snapshot(),
            index: &roster,
            horizon: 2.0,
            filter: |_: &Snapshot| true,
            query_radius: conservative_radius(MAX_SPEED, RADIUS),
            cancelled: || false,
            vo: VoCfg::default(),
        })
        .expect("roster queries cannot fail");
        roster.advance(&mutations, DT);

        let a = &roster.snapshot()[0];
        let b = &roster.snapshot()[1];
        let gap = (a.position() - b.position()).norm();
        min_gap = min_gap.min(gap);
        if tick % 8 == 0 {
            println!(
                "tick={tick:2} gap={gap:8.3} a=({:7.3}, {:6.3}) b=({:7.3}, {:6.3})",
                a.position().x,
                a.position().y,
                b.position().x,
                b.position().y
            );
        }
    }

    let goal_miss: f64 = roster
        .snapshot()
        .iter()
        .map(|a| (a.goal() - a.position()).norm())
        .fold(0.0, f64::max);
    println!("min_gap={min_gap:.3} (combined radius {})", 2.0 * RADIUS);
    println!("worst goal distance after run: {goal_miss:.3}");
}
