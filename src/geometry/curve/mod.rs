mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::error::Result;
use crate::math::Point3;

/// A curve handled by the composite algorithms: a line or a circular arc.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(Line),
    Arc(Arc),
}

impl Curve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// With `normalized`, `t` runs over `[0, 1]` from start to end.
    /// Otherwise `t` is a distance for lines and an angle for arcs.
    ///
    /// # Errors
    ///
    /// Returns an error for normalized evaluation of an unbounded line.
    pub fn evaluate(&self, t: f64, normalized: bool) -> Result<Point3> {
        match self {
            Self::Line(line) => line.evaluate(t, normalized),
            Self::Arc(arc) => Ok(arc.evaluate(t, normalized)),
        }
    }

    /// Point at normalized parameter 0.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an unbounded line.
    pub fn start_point(&self) -> Result<Point3> {
        self.evaluate(0.0, true)
    }

    /// Point at normalized parameter 1.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an unbounded line.
    pub fn end_point(&self) -> Result<Point3> {
        self.evaluate(1.0, true)
    }

    /// Point at normalized parameter 0.5.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an unbounded line.
    pub fn midpoint(&self) -> Result<Point3> {
        self.evaluate(0.5, true)
    }

    /// Returns whether the curve has two endpoints.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        match self {
            Self::Line(line) => line.is_bound(),
            Self::Arc(_) => true,
        }
    }

    /// Curve length, or `None` for an unbounded line.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => Some(arc.length()),
        }
    }

    /// Returns the curve with its endpoints swapped. An arc keeps its
    /// original midpoint as the interior point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for an unbounded line.
    pub fn reversed(&self) -> Result<Self> {
        match self {
            Self::Line(line) => line.reversed().map(Self::Line),
            Self::Arc(arc) => arc.reversed().map(Self::Arc),
        }
    }
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Curve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}
