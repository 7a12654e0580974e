use super::*;
use crate::Vec2;

const EPS: f64 = 1e-12;

#[test]
fn det_orientation() {
    let x = Vec2::new(1.0, 0.0);
    let y = Vec2::new(0.0, 1.0);
    assert!((det(x, y) - 1.0).abs() < EPS);
    assert!((det(y, x) + 1.0).abs() < EPS);
    // Parallel and antiparallel vectors span no area.
    assert_eq!(det(Vec2::new(2.0, 4.0), Vec2::new(1.0, 2.0)), 0.0);
    assert_eq!(det(Vec2::new(2.0, 4.0), Vec2::new(-1.0, -2.0)), 0.0);
}

#[test]
fn quarter_rotations() {
    let v = Vec2::new(3.0, 4.0);
    assert!(within_vec(rotate_ccw(v), Vec2::new(-4.0, 3.0), EPS));
    assert!(within_vec(rotate_cw(v), Vec2::new(4.0, -3.0), EPS));
    // A full turn through both rotations is the identity.
    assert!(within_vec(rotate_ccw(rotate_cw(v)), v, EPS));
}

#[test]
fn clamp_norm_caps_only_outside() {
    let v = Vec2::new(30.0, 40.0);
    let clamped = clamp_norm(v, 10.0);
    assert!(within_vec(clamped, Vec2::new(6.0, 8.0), EPS));

    let inside = Vec2::new(3.0, 4.0);
    assert_eq!(clamp_norm(inside, 10.0), inside);

    // A zero cap collapses anything to the origin without NaN.
    assert!(within_vec(clamp_norm(v, 0.0), Vec2::zeros(), EPS));
    assert_eq!(clamp_norm(Vec2::zeros(), 0.0), Vec2::zeros());
}

#[test]
fn half_plane_membership_and_violation() {
    // Feasible side: y >= 1.
    let h = HalfPlane::new(Vec2::new(0.0, 1.0), Vec2::new(0.0, 1.0));
    assert!(h.contains(Vec2::new(5.0, 1.0)));
    assert!(h.contains(Vec2::new(0.0, 2.0)));
    assert!(!h.contains(Vec2::new(0.0, 0.5)));
    assert!(h.contains_eps(Vec2::new(0.0, 1.0 - 1e-12), 1e-9));

    assert!((h.violation(Vec2::new(0.0, -1.0)) - 2.0).abs() < EPS);
    assert!(h.violation(Vec2::new(0.0, 3.0)) < 0.0);
}

#[test]
fn half_plane_direction_feasible_side_on_left() {
    let h = HalfPlane::new(Vec2::new(0.0, 1.0), Vec2::new(0.0, 1.0));
    let d = h.direction();
    assert!(within_vec(d, Vec2::new(1.0, 0.0), EPS));
    // Left of the direction (ccw) points into the feasible side.
    assert!(within_vec(rotate_ccw(d), h.normal, EPS));
}

#[test]
fn half_plane_coincidence_is_point_invariant() {
    let n = Vec2::new(0.0, 1.0);
    let a = HalfPlane::new(Vec2::new(0.0, 1.0), n);
    let b = HalfPlane::new(Vec2::new(7.0, 1.0), n);
    let c = HalfPlane::new(Vec2::new(0.0, 2.0), n);
    let eps = Tolerance::default().eps_test;
    assert!(HalfPlane::coincident(a, b, eps));
    assert!(!HalfPlane::coincident(a, c, eps));
    // Same line, opposite orientation: not coincident.
    let d = HalfPlane::new(Vec2::new(0.0, 1.0), -n);
    assert!(!HalfPlane::coincident(a, d, eps));
}
