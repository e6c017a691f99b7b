use crate::error::{GeometryError, OperationError, Result};
use crate::math::Point3;

use super::Plane;

/// A bounded planar face: a plane plus a closed polygonal outer boundary.
///
/// The boundary is implicitly closed (the last vertex connects back to the
/// first) and must lie on the plane.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    plane: Plane,
    boundary: Vec<Point3>,
}

impl PlanarFace {
    /// Creates a face from its supporting plane and boundary polygon.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 3 boundary points are given
    /// - `GeometryError::Degenerate` if a boundary point is further than
    ///   `tolerance` from the plane
    pub fn new(plane: Plane, boundary: Vec<Point3>, tolerance: f64) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(OperationError::InvalidInput(
                "a face boundary needs at least 3 points".to_owned(),
            )
            .into());
        }
        if let Some(off) = boundary
            .iter()
            .find(|p| plane.signed_distance(p).abs() > tolerance)
        {
            return Err(GeometryError::Degenerate(format!(
                "boundary point ({}, {}, {}) is off the face plane",
                off.x, off.y, off.z
            ))
            .into());
        }
        Ok(Self { plane, boundary })
    }

    /// Returns the supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns the boundary polygon.
    #[must_use]
    pub fn boundary(&self) -> &[Point3] {
        &self.boundary
    }

    /// Returns whether `point`, taken in the face plane's local coordinates,
    /// lies inside the boundary or on it.
    ///
    /// Uses the winding number, so self-overlapping boundaries count the
    /// overlap as inside.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        let (px, py) = self.plane.to_local(point);
        let uvs: Vec<(f64, f64)> = self.boundary.iter().map(|p| self.plane.to_local(p)).collect();
        on_polygon_edge(px, py, &uvs) || winding_number_2d(px, py, &uvs) != 0
    }
}

/// Winding number of point `(px, py)` with respect to polygon `verts`.
fn winding_number_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        let side = (x1 - x0) * (py - y0) - (y1 - y0) * (px - x0);

        if y0 <= py {
            if y1 > py && side > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

fn on_polygon_edge(px: f64, py: f64, verts: &[(f64, f64)]) -> bool {
    const EDGE_EPS: f64 = 1e-9;
    let n = verts.len();
    (0..n).any(|i| {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len_sq = dx * dx + dy * dy;
        if len_sq < EDGE_EPS * EDGE_EPS {
            return (px - x0).hypot(py - y0) < EDGE_EPS;
        }
        let t = (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0);
        (px - (x0 + t * dx)).hypot(py - (y0 + t * dy)) < EDGE_EPS
    })
}
