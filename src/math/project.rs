//! Orthogonal projection of points and lines onto planes and directions.

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Line, Plane};

use super::{Point3, Vector3};

/// Distance along an unbounded line used to derive its projected direction.
const DIRECTION_SAMPLE: f64 = 100.0;

/// Orthogonal projection of `point` onto `plane`.
///
/// `point - ((n · (point - origin)) / |n|²) · n`; valid for a normal of any
/// non-zero magnitude.
#[must_use]
pub fn project_point(point: &Point3, plane: &Plane) -> Point3 {
    let n = plane.normal();
    let k = n.dot(&(point - plane.origin())) / n.norm_squared();
    point - n * k
}

/// Projects a line onto `plane`.
///
/// A bounded line keeps its endpoints' projections. An unbounded line is
/// rebuilt through its projected origin with the projected direction.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` when the line is parallel to the
/// plane normal, so its projection collapses to a point (for an unbounded
/// line, when the projected direction is shorter than `tolerance`).
pub fn project_line(line: &Line, plane: &Plane, tolerance: f64) -> Result<Line> {
    if line.is_bound() {
        let (start, end) = line.endpoints()?;
        return Line::bound(project_point(&start, plane), project_point(&end, plane));
    }

    let origin = project_point(line.origin(), plane);
    let sample = project_point(&(line.origin() + line.direction() * DIRECTION_SAMPLE), plane);
    let diff = sample - origin;
    let len = diff.norm();
    if len < tolerance {
        return Err(GeometryError::Degenerate(
            "line is parallel to the plane normal".to_owned(),
        )
        .into());
    }
    Line::new(origin, diff / len)
}

/// Projects a bounded line onto the direction `direction`, measured from the
/// line's start point.
///
/// Both endpoints are projected onto the unbounded reference line through the
/// start point along `direction`. Returns `Ok(None)` when the projection
/// degenerates: the projected start lies within `tolerance` of the original
/// end point, or the two projected endpoints coincide (line perpendicular to
/// `direction`).
///
/// # Errors
///
/// - `OperationError::InvalidInput` if `line` is unbounded
/// - `GeometryError::ZeroVector` if `direction` is zero-length
pub fn project_line_onto_direction(
    line: &Line,
    direction: &Vector3,
    tolerance: f64,
) -> Result<Option<Line>> {
    if !line.is_bound() {
        return Err(OperationError::InvalidInput(
            "direction projection needs a bounded line".to_owned(),
        )
        .into());
    }
    let (start, end) = line.endpoints()?;
    let reference = Line::new(start, *direction)?;
    let start_proj = reference.project(&start);
    let end_proj = reference.project(&end);

    if nalgebra::distance(&start_proj, &end) < tolerance
        || nalgebra::distance(&start_proj, &end_proj) < tolerance
    {
        return Ok(None);
    }
    Line::bound(start_proj, end_proj).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::DEGENERACY_TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn point_onto_xy_plane() {
        let plane = Plane::new(p(0.0, 0.0, 2.0), v(0.0, 0.0, 10.0)).unwrap();
        let q = project_point(&p(3.0, -4.0, 7.0), &plane);
        assert_relative_eq!(q, p(3.0, -4.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn point_onto_oblique_plane() {
        // x + y + z = 3
        let plane = Plane::new(p(1.0, 1.0, 1.0), v(1.0, 1.0, 1.0)).unwrap();
        let q = project_point(&p(0.0, 0.0, 0.0), &plane);
        assert_relative_eq!(q, p(1.0, 1.0, 1.0), epsilon = 1e-12);
        assert!(plane.signed_distance(&project_point(&p(5.0, -2.0, 9.0), &plane)).abs() < 1e-12);
    }

    #[test]
    fn projecting_twice_is_a_no_op() {
        let plane = Plane::new(p(0.5, -1.0, 2.0), v(0.3, -2.0, 0.7)).unwrap();
        let once = project_point(&p(4.0, 5.0, 6.0), &plane);
        let twice = project_point(&once, &plane);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
    }

    #[test]
    fn bounded_line_onto_plane() {
        let plane = Plane::xy();
        let line = Line::bound(p(0.0, 0.0, 1.0), p(3.0, 4.0, 9.0)).unwrap();
        let (s, e) = project_line(&line, &plane, DEGENERACY_TOLERANCE)
            .unwrap()
            .endpoints()
            .unwrap();
        assert_relative_eq!(s, p(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(e, p(3.0, 4.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn unbounded_line_onto_plane() {
        let plane = Plane::xy();
        let line = Line::new(p(1.0, 1.0, 5.0), v(1.0, 0.0, 1.0)).unwrap();
        let proj = project_line(&line, &plane, DEGENERACY_TOLERANCE).unwrap();
        assert!(!proj.is_bound());
        assert_relative_eq!(*proj.origin(), p(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(*proj.direction(), v(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn line_along_normal_is_degenerate() {
        let plane = Plane::xy();
        let unbounded = Line::new(p(1.0, 1.0, 5.0), v(0.0, 0.0, -1.0)).unwrap();
        assert!(project_line(&unbounded, &plane, DEGENERACY_TOLERANCE).is_err());
        let bounded = Line::bound(p(1.0, 1.0, 5.0), p(1.0, 1.0, 0.0)).unwrap();
        assert!(project_line(&bounded, &plane, DEGENERACY_TOLERANCE).is_err());
    }

    #[test]
    fn line_onto_direction() {
        let line = Line::bound(p(1.0, 1.0, 0.0), p(4.0, 5.0, 0.0)).unwrap();
        let proj = project_line_onto_direction(&line, &v(1.0, 0.0, 0.0), DEGENERACY_TOLERANCE)
            .unwrap()
            .unwrap();
        let (s, e) = proj.endpoints().unwrap();
        assert_relative_eq!(s, p(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(e, p(4.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_line_onto_direction_has_no_result() {
        let line = Line::bound(p(1.0, 1.0, 0.0), p(1.0, 5.0, 0.0)).unwrap();
        let proj =
            project_line_onto_direction(&line, &v(1.0, 0.0, 0.0), DEGENERACY_TOLERANCE).unwrap();
        assert!(proj.is_none());
    }

    #[test]
    fn zero_direction_is_an_error() {
        let line = Line::bound(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        assert!(project_line_onto_direction(&line, &Vector3::zeros(), DEGENERACY_TOLERANCE).is_err());
    }
}
