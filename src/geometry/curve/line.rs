use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Point3, Vector3, POINT_TOLERANCE};

/// A straight line, either unbounded or bounded to a segment.
///
/// The parametric form is `P(t) = origin + t * direction` with a unit
/// `direction`. A bounded line restricts `t` to `[0, length]`; its origin is
/// the start point.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
    length: Option<f64>,
}

impl Line {
    /// Creates an unbounded line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < POINT_TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
            length: None,
        })
    }

    /// Creates a bounded line from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the two points coincide.
    pub fn bound(start: Point3, end: Point3) -> Result<Self> {
        let d = end - start;
        let len = d.norm();
        if len < POINT_TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "bounded line from ({}, {}, {}) has zero length",
                start.x, start.y, start.z
            ))
            .into());
        }
        Ok(Self {
            origin: start,
            direction: d / len,
            length: Some(len),
        })
    }

    /// Returns the origin point of the line (the start point when bounded).
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the segment length, or `None` for an unbounded line.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Returns whether the line is bounded.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.length.is_some()
    }

    /// Returns the start and end points of a bounded line.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an unbounded line.
    pub fn endpoints(&self) -> Result<(Point3, Point3)> {
        match self.length {
            Some(len) => Ok((self.origin, self.origin + self.direction * len)),
            None => Err(OperationError::InvalidInput(
                "an unbounded line has no endpoints".to_owned(),
            )
            .into()),
        }
    }

    /// Evaluates the line at `t`.
    ///
    /// With `normalized`, `t = 0` is the start and `t = 1` the end of a
    /// bounded line; otherwise `t` is the distance from the origin.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for normalized evaluation of
    /// an unbounded line.
    pub fn evaluate(&self, t: f64, normalized: bool) -> Result<Point3> {
        let distance = if normalized {
            let Some(len) = self.length else {
                return Err(OperationError::InvalidInput(
                    "normalized evaluation of an unbounded line".to_owned(),
                )
                .into());
            };
            t * len
        } else {
            t
        };
        Ok(self.origin + self.direction * distance)
    }

    /// Parameter (distance from the origin) of the foot of the
    /// perpendicular from `point`, unclamped.
    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Closest point on the line to `point`. Bounded lines clamp to their
    /// endpoints.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        let mut t = self.parameter_of(point);
        if let Some(len) = self.length {
            t = t.clamp(0.0, len);
        }
        self.origin + self.direction * t
    }

    /// Returns the same segment traversed from end to start.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for an unbounded line.
    pub fn reversed(&self) -> Result<Self> {
        if !self.is_bound() {
            return Err(
                OperationError::Unsupported("reversal of an unbounded line".to_owned()).into(),
            );
        }
        let (start, end) = self.endpoints()?;
        Self::bound(end, start)
    }

    /// Returns a bounded copy: a bounded line is returned as is, an
    /// unbounded one becomes the segment of `length` starting at its origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not positive.
    pub fn to_bound(&self, length: f64) -> Result<Self> {
        if self.is_bound() {
            return Ok(self.clone());
        }
        Self::bound(self.origin, self.origin + self.direction * length)
    }
}
