use crate::error::{GeometryError, OperationError, Result};
use crate::math::{points_almost_equal, Point3};
use crate::operations::chain::sort_contiguous;

use super::{Curve, Line};

/// A closed chain of bounded curves.
///
/// The end of each curve meets the start of the next within the tolerance
/// used at construction, and the last curve closes back onto the first.
/// Loops used for offsetting are expected to run counter-clockwise when
/// viewed against their normal.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLoop {
    curves: Vec<Curve>,
}

impl CurveLoop {
    /// Creates a loop from curves that are already in chain order.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `curves` is empty or holds an
    ///   unbounded line
    /// - `GeometryError::NonContiguous` if a joint (including the closing
    ///   one) has a gap larger than `tolerance`
    pub fn new(curves: Vec<Curve>, tolerance: f64) -> Result<Self> {
        if curves.is_empty() {
            return Err(OperationError::InvalidInput("a curve loop cannot be empty".to_owned()).into());
        }
        let n = curves.len();
        for i in 0..n {
            let end = curves[i].end_point()?;
            let next_start = curves[(i + 1) % n].start_point()?;
            if !points_almost_equal(&end, &next_start, tolerance) {
                return Err(GeometryError::NonContiguous.into());
            }
        }
        Ok(Self { curves })
    }

    /// Creates a closed polygon of bounded lines through `points`.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 3 points are given
    /// - `GeometryError::Degenerate` if two consecutive points coincide
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        if points.len() < 3 {
            return Err(OperationError::InvalidInput(
                "a polygon loop needs at least 3 points".to_owned(),
            )
            .into());
        }
        let n = points.len();
        let curves = (0..n)
            .map(|i| Line::bound(points[i], points[(i + 1) % n]).map(Curve::Line))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { curves })
    }

    /// Chains unordered curves (reversing some if needed) and closes them
    /// into a loop.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonContiguous` if the curves do not form a
    /// single closed chain within `tolerance`.
    pub fn from_unordered(mut curves: Vec<Curve>, tolerance: f64) -> Result<Self> {
        sort_contiguous(&mut curves, tolerance)?;
        Self::new(curves, tolerance)
    }

    /// Returns the curves in loop order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Number of curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Always `false` for a constructed loop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates the curves in loop order.
    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Start point of every curve, in loop order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        // Every curve was checked to be bounded at construction.
        self.curves.iter().filter_map(|c| c.start_point().ok()).collect()
    }
}

impl<'a> IntoIterator for &'a CurveLoop {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
