use crate::geometry::surface::Plane;

use super::{Point3, Vector3, POINT_TOLERANCE};

/// Relationship between two planes.
#[derive(Debug)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine {
        origin: Point3,
        direction: Vector3,
    },
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Computes the intersection of two planes.
///
/// Returns an [`IntersectionLine`](PlanePairRelation::IntersectionLine) with a
/// unit-length `direction` when the planes cross, [`Parallel`](PlanePairRelation::Parallel)
/// when they don't, or [`Coincident`](PlanePairRelation::Coincident) when they overlap.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane, tolerance: f64) -> PlanePairRelation {
    let na = a.unit_normal();
    let nb = b.unit_normal();

    let dir = na.cross(&nb);
    let dir_len = dir.norm();

    if dir_len < POINT_TOLERANCE {
        // Normals are (anti-)parallel.
        let dist = (b.origin() - a.origin()).dot(&na).abs();
        if dist < tolerance {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance: dist }
        }
    } else {
        // p = oa + s * na + t * nb solves na.(p - oa) = 0 and nb.(p - ob) = 0.
        let d2 = nb.dot(&(b.origin() - a.origin()));
        let dot_nn = na.dot(&nb);
        let denom = 1.0 - dot_nn * dot_nn;
        let s = -dot_nn * d2 / denom;
        let t = d2 / denom;

        PlanePairRelation::IntersectionLine {
            origin: a.origin() + na * s + nb * t,
            direction: dir / dir_len,
        }
    }
}

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line intersects the plane at a single point.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line `origin + t * dir` with a plane.
#[must_use]
pub fn line_plane_intersect(
    origin: &Point3,
    dir: &Vector3,
    plane: &Plane,
    tolerance: f64,
) -> LinePlaneRelation {
    let normal = plane.unit_normal();
    let denom = normal.dot(dir);
    let numer = normal.dot(&(plane.origin() - origin));

    if denom.abs() < POINT_TOLERANCE {
        if numer.abs() < tolerance {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        LinePlaneRelation::Point {
            point: origin + dir * t,
            t,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    // ── plane_plane_intersect ──

    #[test]
    fn perpendicular_planes_intersect() {
        let xy = Plane::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let xz = Plane::new(p(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0)).unwrap();

        match plane_plane_intersect(&xy, &xz, TOL) {
            PlanePairRelation::IntersectionLine { direction, .. } => {
                assert!(direction.x.abs() > 0.99, "expected X-axis direction, got {direction:?}");
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn intersection_point_lies_on_both_planes() {
        let a = Plane::new(p(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0)).unwrap();
        let b = Plane::new(p(0.0, 2.0, 0.0), v(0.0, 1.0, 1.0)).unwrap();

        match plane_plane_intersect(&a, &b, TOL) {
            PlanePairRelation::IntersectionLine { origin, .. } => {
                assert!(a.signed_distance(&origin).abs() < TOL);
                assert!(b.signed_distance(&origin).abs() < TOL);
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn parallel_and_coincident_planes() {
        let a = Plane::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let b = Plane::new(p(0.0, 0.0, 3.0), v(0.0, 0.0, -1.0)).unwrap();
        let c = Plane::new(p(1.0, 2.0, 0.0), v(0.0, 0.0, 4.0)).unwrap();

        match plane_plane_intersect(&a, &b, TOL) {
            PlanePairRelation::Parallel { distance } => assert!((distance - 3.0).abs() < TOL),
            other => panic!("expected Parallel, got {other:?}"),
        }
        assert!(matches!(plane_plane_intersect(&a, &c, TOL), PlanePairRelation::Coincident));
    }

    // ── line_plane_intersect ──

    #[test]
    fn line_hits_plane() {
        let plane = Plane::new(p(0.0, 0.0, 5.0), v(0.0, 0.0, 1.0)).unwrap();
        match line_plane_intersect(&p(0.0, 0.0, 0.0), &v(0.0, 0.0, 1.0), &plane, TOL) {
            LinePlaneRelation::Point { point, t } => {
                assert!((t - 5.0).abs() < TOL);
                assert!((point.z - 5.0).abs() < TOL);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn line_parallel_to_or_on_plane() {
        let plane = Plane::new(p(0.0, 0.0, 5.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(matches!(
            line_plane_intersect(&p(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), &plane, TOL),
            LinePlaneRelation::Parallel
        ));
        assert!(matches!(
            line_plane_intersect(&p(1.0, 2.0, 5.0), &v(1.0, 0.0, 0.0), &plane, TOL),
            LinePlaneRelation::OnPlane
        ));
    }
}
