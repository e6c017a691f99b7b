use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::Curve;
use crate::math::points_almost_equal;

/// Reorders `curves` in place so that each curve ends where the next one
/// starts, reversing curves where needed.
///
/// The curves must be chainable: for every curve some remaining curve has an
/// endpoint within `tolerance` of its end point. Each pass picks the first
/// such successor, swaps it into the next slot, and reverses it when it was
/// matched by its end point. Already placed curves are never moved again.
///
/// # Errors
///
/// - `GeometryError::NonContiguous` if a curve other than the last has no
///   successor within `tolerance`; `curves` is left partially sorted
/// - `OperationError::InvalidInput` if a curve is an unbounded line
pub fn sort_contiguous(curves: &mut [Curve], tolerance: f64) -> Result<()> {
    let count = curves.len();
    for i in 0..count.saturating_sub(1) {
        let end = curves[i].end_point()?;

        let mut found = false;
        for j in (i + 1)..count {
            if points_almost_equal(&curves[j].start_point()?, &end, tolerance) {
                if j != i + 1 {
                    trace!(from = j, to = i + 1, "moving successor");
                    curves.swap(i + 1, j);
                }
                found = true;
                break;
            }
            if points_almost_equal(&curves[j].end_point()?, &end, tolerance) {
                trace!(from = j, to = i + 1, "moving reversed successor");
                let reversed = curves[j].reversed()?;
                curves.swap(i + 1, j);
                curves[i + 1] = reversed;
                found = true;
                break;
            }
        }

        if !found {
            debug!(index = i, "no successor within tolerance");
            return Err(GeometryError::NonContiguous.into());
        }
    }
    Ok(())
}

/// Returns a chained copy of `curves`, leaving the input untouched.
///
/// # Errors
///
/// Same as [`sort_contiguous`].
pub fn sorted_contiguous(curves: &[Curve], tolerance: f64) -> Result<Vec<Curve>> {
    let mut sorted = curves.to_vec();
    sort_contiguous(&mut sorted, tolerance)?;
    Ok(sorted)
}
