use crate::error::{GeometryError, Result};
use crate::geometry::Line;
use crate::math::angle::degrees_to_radians;
use crate::math::{Point3, POINT_TOLERANCE};

/// Length given to an unbounded axis before rotating about it.
const AXIS_EXTENT: f64 = 1000.0;

/// Rotates points about an arbitrary axis line.
#[derive(Debug)]
pub struct RotateAboutAxis {
    axis: Line,
    angle_degrees: f64,
}

impl RotateAboutAxis {
    /// Creates a new `RotateAboutAxis` operation.
    ///
    /// * `angle_degrees` - Rotation angle in degrees, counter-clockwise when
    ///   looking against the axis direction.
    #[must_use]
    pub fn new(axis: Line, angle_degrees: f64) -> Self {
        Self {
            axis,
            angle_degrees,
        }
    }

    /// Rotates `point` about the axis (Rodrigues' formula).
    ///
    /// The rotation is centered on the axis start point: the direction from
    /// that point to `point` is rotated and rescaled to the original
    /// distance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `point` coincides with the
    /// axis start point.
    pub fn apply(&self, point: &Point3) -> Result<Point3> {
        let (origin, end) = self.axis.to_bound(AXIS_EXTENT)?.endpoints()?;
        let u = (end - origin).normalize();

        let offset = point - origin;
        let distance = offset.norm();
        let Some(v) = offset.try_normalize(POINT_TOLERANCE) else {
            return Err(GeometryError::Degenerate(
                "point lies on the axis origin; no direction to rotate".to_owned(),
            )
            .into());
        };

        let theta = degrees_to_radians(self.angle_degrees);
        let (s, c) = theta.sin_cos();
        let rotated = v * c + u * ((1.0 - c) * u.dot(&v)) + u.cross(&v) * s;

        Ok(origin + rotated * distance)
    }
}
