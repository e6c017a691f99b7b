use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, POINT_TOLERANCE};

/// A circular arc in 3D space.
///
/// Built from a start point, an end point and any interior point. The arc
/// sweeps counter-clockwise around `normal` from the start, through the
/// interior point, to the end. Angles are measured from `ref_dir`, the unit
/// vector from the center to the start point.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    sweep: f64,
}

impl Arc {
    /// Creates the arc from `start` to `end` passing through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if two of the points coincide or
    /// all three are collinear.
    pub fn through(start: Point3, end: Point3, through: Point3) -> Result<Self> {
        if (end - start).norm() < POINT_TOLERANCE
            || (through - start).norm() < POINT_TOLERANCE
            || (through - end).norm() < POINT_TOLERANCE
        {
            return Err(GeometryError::Degenerate("arc points must be distinct".into()).into());
        }

        // Circumcenter of (start, through, end); the triangle's orientation
        // gives the sweep direction.
        let a = through - start;
        let b = end - start;
        let n = a.cross(&b);
        let n_sq = n.norm_squared();
        if n_sq.sqrt() < POINT_TOLERANCE * a.norm().max(b.norm()) {
            return Err(GeometryError::Degenerate("arc points are collinear".into()).into());
        }
        let center = start + (a.norm_squared() * b - b.norm_squared() * a).cross(&n) / (2.0 * n_sq);
        let radius = (start - center).norm();
        let normal = n / n_sq.sqrt();
        let ref_dir = (start - center) / radius;

        let mut arc = Self {
            center,
            radius,
            normal,
            ref_dir,
            sweep: TAU,
        };
        arc.sweep = arc.angle_of(&end);
        Ok(arc)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the unit normal of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the swept angle in radians, in `(0, 2π)`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }

    /// Evaluates the arc. With `normalized`, `t` runs over `[0, 1]` from
    /// start to end; otherwise `t` is the angle in radians from the start.
    #[must_use]
    pub fn evaluate(&self, t: f64, normalized: bool) -> Point3 {
        let angle = if normalized { t * self.sweep } else { t };
        self.center
            + self.ref_dir * (self.radius * angle.cos())
            + self.binormal() * (self.radius * angle.sin())
    }

    /// Angle in `[0, 2π)` of `point` around the arc axis, measured from
    /// the start point. The point is projected into the arc plane first.
    #[must_use]
    pub fn angle_of(&self, point: &Point3) -> f64 {
        let d = point - self.center;
        let angle = d.dot(&self.binormal()).atan2(d.dot(&self.ref_dir));
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Returns whether `point` lies on the arc within `tolerance`.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tolerance: f64) -> bool {
        let d = point - self.center;
        let off_plane = d.dot(&self.normal);
        let in_plane = d - self.normal * off_plane;
        if off_plane.abs() > tolerance || (in_plane.norm() - self.radius).abs() > tolerance {
            return false;
        }
        let angle = self.angle_of(point);
        let angle_tol = tolerance / self.radius;
        angle <= self.sweep + angle_tol || angle >= TAU - angle_tol
    }

    /// Returns the arc traversed from end to start, through the same
    /// midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the reversed arc cannot be rebuilt (not expected
    /// for an arc that was itself valid).
    pub fn reversed(&self) -> Result<Self> {
        Self::through(
            self.evaluate(1.0, true),
            self.evaluate(0.0, true),
            self.evaluate(0.5, true),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn half_circle() -> Arc {
        Arc::through(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)).unwrap()
    }

    #[test]
    fn three_point_arc_geometry() {
        let arc = half_circle();
        assert!((arc.center() - p(0.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((arc.radius() - 1.0).abs() < 1e-12);
        assert!((arc.normal().z - 1.0).abs() < 1e-12);
        assert!((arc.sweep() - PI).abs() < 1e-12);
        assert!((arc.length() - PI).abs() < 1e-12);
    }

    #[test]
    fn clockwise_arc_flips_normal() {
        let arc = Arc::through(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), p(0.0, -1.0, 0.0)).unwrap();
        assert!((arc.normal().z + 1.0).abs() < 1e-12);
        let mid = arc.evaluate(0.5, true);
        assert!((mid - p(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn evaluate_endpoints_and_midpoint() {
        let arc = half_circle();
        assert!((arc.evaluate(0.0, true) - p(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((arc.evaluate(1.0, true) - p(-1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((arc.evaluate(0.5, true) - p(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((arc.evaluate(PI / 2.0, false) - p(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn major_arc_sweep() {
        // Start at +x, pass through -y, end at +y: three quarters of a turn.
        let arc = Arc::through(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, -1.0, 0.0)).unwrap();
        assert!((arc.sweep() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_rejected() {
        assert!(Arc::through(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).is_err());
        assert!(Arc::through(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).is_err());
    }

    #[test]
    fn contains_point_respects_sweep() {
        let arc = half_circle();
        assert!(arc.contains_point(&p(0.0, 1.0, 0.0), 1e-9));
        assert!(arc.contains_point(&p(1.0, 0.0, 0.0), 1e-9));
        assert!(!arc.contains_point(&p(0.0, -1.0, 0.0), 1e-9));
        assert!(!arc.contains_point(&p(0.0, 1.0, 0.1), 1e-9));
    }

    #[test]
    fn reversed_keeps_midpoint() {
        let arc = half_circle();
        let rev = arc.reversed().unwrap();
        assert!((rev.evaluate(0.0, true) - p(-1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((rev.evaluate(1.0, true) - p(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((rev.evaluate(0.5, true) - p(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((rev.normal().z + 1.0).abs() < 1e-12);
    }
}
