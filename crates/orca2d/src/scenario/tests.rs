use crate::Vec2;

use super::*;
use crate::geometry::within_vec;
use crate::replay::Token;

const TOLERANCE: f64 = 1e-12;

#[test]
fn records_round_trip_through_json() {
    let records = head_on(50.0, 5.0, 10.0);
    let encoded = to_json(&records).unwrap();
    let decoded = from_json(&encoded).unwrap();
    assert_eq!(records, decoded);
}

#[test]
fn generators_replay_from_tokens() {
    let tok = Token { seed: 42, index: 7 };
    let first = random(16, 100.0, 3.0, 12.0, tok);
    let second = random(16, 100.0, 3.0, 12.0, tok);
    assert_eq!(first, second);

    // A different index draws a different population.
    let other = random(16, 100.0, 3.0, 12.0, Token { seed: 42, index: 8 });
    assert_ne!(first, other);

    let g1 = grid(4, 4, 50.0, 5.0, 10.0, tok);
    let g2 = grid(4, 4, 50.0, 5.0, 10.0, tok);
    assert_eq!(g1, g2);
    assert_eq!(g1.len(), 16);
}

#[test]
fn grid_goals_are_a_permutation_of_positions() {
    let records = grid(3, 3, 50.0, 5.0, 10.0, Token { seed: 1, index: 0 });
    let mut positions: Vec<_> = records.iter().map(|r| (r.position.x as i64, r.position.y as i64)).collect();
    let mut goals: Vec<_> = records.iter().map(|r| (r.goal.x as i64, r.goal.y as i64)).collect();
    positions.sort_unstable();
    goals.sort_unstable();
    assert_eq!(positions, goals);
}

#[test]
fn head_on_agents_face_each_other() {
    let records = head_on(50.0, 5.0, 10.0);
    assert_eq!(records.len(), 2);
    assert!(within_vec(records[0].position, Vec2::new(-50.0, 0.0), TOLERANCE));
    assert!(within_vec(records[1].position, Vec2::new(50.0, 0.0), TOLERANCE));
    // Goals lie past the opposing agent.
    assert!(within_vec(records[0].goal, Vec2::new(50.0, 0.0), TOLERANCE));
    assert!(within_vec(records[1].goal, Vec2::new(-50.0, 0.0), TOLERANCE));
}

#[test]
fn preferred_velocity_derives_from_goal_and_caps_at_max_speed() {
    let roster = Roster::new(&[
        Record {
            position: Vec2::zeros(),
            goal: Vec2::new(30.0, 40.0),
            radius: 1.0,
            max_speed: 10.0,
        },
        Record {
            position: Vec2::zeros(),
            goal: Vec2::new(3.0, 4.0),
            radius: 1.0,
            max_speed: 10.0,
        },
    ]);
    let agents = roster.snapshot();
    assert!(within_vec(agents[0].preferred_velocity(), Vec2::new(6.0, 8.0), TOLERANCE));
    assert!(within_vec(agents[1].preferred_velocity(), Vec2::new(3.0, 4.0), TOLERANCE));
}

#[test]
fn roster_queries_exclude_ego_and_respect_radius() {
    let roster = Roster::new(&[
        Record {
            position: Vec2::zeros(),
            goal: Vec2::zeros(),
            radius: 1.0,
            max_speed: 1.0,
        },
        Record {
            position: Vec2::new(3.0, 0.0),
            goal: Vec2::zeros(),
            radius: 1.0,
            max_speed: 1.0,
        },
        Record {
            position: Vec2::new(10.0, 0.0),
            goal: Vec2::zeros(),
            radius: 1.0,
            max_speed: 1.0,
        },
    ]);
    let agents = roster.snapshot();

    let near = roster.within(&agents[0], 5.0).unwrap();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0].id(), 1);

    let all = roster.within(&agents[0], 50.0).unwrap();
    assert_eq!(all.len(), 2);
    // Stable storage order.
    assert_eq!(all[0].id(), 1);
    assert_eq!(all[1].id(), 2);
}

#[test]
fn advance_applies_mutations_and_moves_agents() {
    let mut roster = Roster::new(&[Record {
        position: Vec2::zeros(),
        goal: Vec2::new(100.0, 0.0),
        radius: 1.0,
        max_speed: 10.0,
    }]);
    let mutations = vec![Mutation {
        agent: roster.snapshot()[0].clone(),
        velocity: Vec2::new(10.0, 0.0),
        feasible: true,
    }];
    roster.advance(&mutations, 0.5);
    let agent = &roster.snapshot()[0];
    assert!(within_vec(agent.position(), Vec2::new(5.0, 0.0), TOLERANCE));
    assert!(within_vec(agent.velocity(), Vec2::new(10.0, 0.0), TOLERANCE));
}
