use std::f64::consts::{PI, TAU};

use super::Vector3;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Angle in `[0, 2π)` that takes `a` to `b`, signed by `rotation_axis`.
///
/// The unsigned angle between the vectors is negated when
/// `rotation_axis · (a × b)` is negative and then folded into `[0, 2π)`.
/// When that triple product is within `tolerance` of zero the result is
/// `0` if `a` and `b` are equal within `tolerance` and `π` otherwise, so
/// parallel vectors of different lengths give `π`.
///
/// Choosing the view direction as `rotation_axis` measures clockwise as
/// seen along it; its negation measures counter-clockwise.
#[must_use]
pub fn signed_angle(a: &Vector3, b: &Vector3, rotation_axis: &Vector3, tolerance: f64) -> f64 {
    let triple = rotation_axis.dot(&a.cross(b));
    let scale = rotation_axis.norm() * a.norm() * b.norm();

    if triple.abs() <= tolerance * scale.max(f64::MIN_POSITIVE) {
        let equal = (a - b).norm() <= tolerance;
        return if equal { 0.0 } else { PI };
    }

    let angle = a.angle(b);
    if triple > 0.0 {
        angle
    } else {
        TAU - angle
    }
}
