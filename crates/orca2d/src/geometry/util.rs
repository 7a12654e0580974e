use crate::Vec2;

/// 2-D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn det(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotate by +π/2 (counterclockwise).
#[inline]
pub fn rotate_ccw(v: Vec2<f64>) -> Vec2<f64> {
    Vec2::new(-v.y, v.x)
}

/// Rotate by −π/2 (clockwise).
#[inline]
pub fn rotate_cw(v: Vec2<f64>) -> Vec2<f64> {
    Vec2::new(v.y, -v.x)
}

/// Unit vector in the direction of `v`. Undefined at zero; callers guard.
#[inline]
pub fn unit(v: Vec2<f64>) -> Vec2<f64> {
    debug_assert!(v.norm() > 0.0, "unit() of zero-length vector");
    v / v.norm()
}

/// Scale `v` back onto the disc of radius `s` if it lies outside.
#[inline]
pub fn clamp_norm(v: Vec2<f64>, s: f64) -> Vec2<f64> {
    if v.norm_squared() > s * s {
        unit(v) * s
    } else {
        v
    }
}

/// Scalar eps comparison.
#[inline]
pub fn within(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Vector eps comparison (Euclidean).
#[inline]
pub fn within_vec(a: Vec2<f64>, b: Vec2<f64>, eps: f64) -> bool {
    (a - b).norm() <= eps
}
