use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Curve, Line, Plane};
use crate::kernel::GeometryKernel;
use crate::math::project::project_point;
use crate::math::{points_almost_equal, Point3, Tolerance, Vector3};

use super::intersect::{intersect_lines, order_along};

/// Half-length of the scan line; must exceed the extent of any region
/// tested.
const SCAN_REACH: f64 = 1e6;

/// Tests whether points lie inside a planar region bounded by straight
/// edges.
///
/// # Algorithm
///
/// The query point and the boundary edges are projected onto `plane`. A
/// long scan line through the projected point along `right_direction` is
/// intersected with every edge; distinct crossings are ordered along the
/// scan direction. The point is inside when an odd number of crossings lies
/// on each side of it.
///
/// A point on an edge that crosses the scan line coincides with that
/// crossing and is reported outside. A point on an edge parallel to the
/// scan line sees no crossing from that edge and is reported inside.
#[derive(Debug)]
pub struct PointInRegion {
    boundary: Vec<Curve>,
    plane: Plane,
    right_direction: Vector3,
    tolerance: Tolerance,
}

impl PointInRegion {
    /// Creates a region test for the given boundary edges (in any order).
    #[must_use]
    pub fn new(boundary: Vec<Curve>, plane: Plane, right_direction: Vector3) -> Self {
        Self {
            boundary,
            plane,
            right_direction,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the default tolerances.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns whether `point` lies inside the region.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the scan direction is zero-length,
    ///   or a boundary curve is unbounded
    pub fn contains<K: GeometryKernel + ?Sized>(&self, kernel: &K, point: &Point3) -> Result<bool> {
        let len = self.right_direction.norm();
        if len < self.tolerance.degeneracy {
            return Err(OperationError::InvalidInput(
                "scan direction must be non-zero".to_owned(),
            )
            .into());
        }
        let right = self.right_direction / len;

        let origin = project_point(point, &self.plane);
        let scan = Line::bound(origin + right * SCAN_REACH, origin - right * SCAN_REACH)?;

        let mut crossings = vec![origin];
        for curve in &self.boundary {
            if !curve.is_bound() {
                return Err(OperationError::InvalidInput(
                    "region boundary contains an unbounded line".to_owned(),
                )
                .into());
            }
            let start = project_point(&curve.start_point()?, &self.plane);
            let end = project_point(&curve.end_point()?, &self.plane);
            if points_almost_equal(&start, &end, self.tolerance.point) {
                trace!("skipping boundary edge that projects to a point");
                continue;
            }
            let edge = Line::bound(start, end)?;

            if let Some(hit) = intersect_lines(kernel, &scan, &edge) {
                if !crossings
                    .iter()
                    .any(|q| points_almost_equal(q, &hit, self.tolerance.point))
                {
                    crossings.push(hit);
                }
            }
        }

        let ordered = order_along(crossings, &right);
        let index = ordered
            .iter()
            .position(|q| points_almost_equal(q, &origin, self.tolerance.point))
            .unwrap_or(0);
        let before = index;
        let after = ordered.len() - 1 - index;
        let inside = before % 2 == 1 && after % 2 == 1;

        debug!(before, after, inside, "region parity test");
        Ok(inside)
    }
}
