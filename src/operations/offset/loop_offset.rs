use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::CurveLoop;
use crate::math::{Point3, Tolerance};

/// Offsets a closed polygonal loop in its local XY plane.
///
/// Only the start point of each curve is used as a polygon vertex, so arcs
/// are replaced by their chords; the result is always made of straight
/// lines.
///
/// # Algorithm
///
/// For each vertex with neighbours `prev` and `next`, the unit vectors
/// `v1 = prev - curr` and `v2 = next - curr` span a rhombus whose diagonal
/// `v1 + v2` bisects the corner. Moving the vertex along that diagonal by
/// `distance / (v1 × v2)` places it at perpendicular distance `distance`
/// from both adjacent edges, for any corner angle. Vertices whose
/// neighbours are collinear (`|v1 × v2|` below the degeneracy tolerance)
/// are dropped.
///
/// # Sign Convention
///
/// For a counter-clockwise loop:
/// - Positive distance: enlarge
/// - Negative distance: shrink
#[derive(Debug)]
pub struct LoopOffset {
    curve_loop: CurveLoop,
    distance: f64,
    tolerance: Tolerance,
}

impl LoopOffset {
    /// Creates a new loop offset operation.
    #[must_use]
    pub fn new(curve_loop: CurveLoop, distance: f64) -> Self {
        Self {
            curve_loop,
            distance,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the default tolerances.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the offset, returning a new loop.
    ///
    /// # Errors
    ///
    /// - `OperationError::Failed` if fewer than 3 vertices survive
    /// - `GeometryError::Degenerate` if two consecutive offset vertices
    ///   coincide
    pub fn execute(&self) -> Result<CurveLoop> {
        let vertices = self.curve_loop.vertices();
        let offset = self.offset_vertices(&vertices);

        if offset.len() < 3 {
            return Err(OperationError::Failed(format!(
                "offset collapsed to {} vertices",
                offset.len()
            ))
            .into());
        }
        CurveLoop::from_points(&offset)
    }

    fn offset_vertices(&self, vertices: &[Point3]) -> Vec<Point3> {
        let n = vertices.len();
        let eps = self.tolerance.degeneracy;
        let mut result = Vec::with_capacity(n);

        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let curr = vertices[i];
            let next = vertices[(i + 1) % n];

            let (Some(v1), Some(v2)) = ((prev - curr).try_normalize(eps), (next - curr).try_normalize(eps))
            else {
                debug!(index = i, "dropping vertex with a zero-length neighbour edge");
                continue;
            };

            let cross = v1.x * v2.y - v1.y * v2.x;
            if cross.abs() <= eps {
                debug!(index = i, "dropping vertex with collinear neighbours");
                continue;
            }

            result.push(curr + (v1 + v2) * (self.distance / cross));
        }
        result
    }
}
