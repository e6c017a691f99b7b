//! Intersection queries consumed by the composite algorithms.
//!
//! The algorithms in [`crate::operations`] only need two primitive queries
//! from a geometry kernel. [`GeometryKernel`] captures them so a CAD engine
//! can be plugged in; [`AnalyticKernel`] answers them in closed form for
//! lines, arcs and planar faces.

mod analytic;

pub use analytic::AnalyticKernel;

use crate::geometry::{Curve, Line, PlanarFace};
use crate::math::Point3;

/// How two entities relate after an intersection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// No common point.
    Disjoint,
    /// One or more isolated common points.
    Intersecting,
    /// The entities share a continuous piece (collinear overlap, same
    /// circle, line lying in a face).
    Coincident,
}

/// Outcome of an intersection query.
///
/// For [`Relation::Intersecting`] `points` holds the isolated common points.
/// For [`Relation::Coincident`] it holds the bounds of the shared piece when
/// they are finite, and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub relation: Relation,
    pub points: Vec<Point3>,
}

impl Intersection {
    /// No common point.
    #[must_use]
    pub fn disjoint() -> Self {
        Self {
            relation: Relation::Disjoint,
            points: Vec::new(),
        }
    }

    /// Isolated common points; an empty list collapses to
    /// [`Relation::Disjoint`].
    #[must_use]
    pub fn at(points: Vec<Point3>) -> Self {
        if points.is_empty() {
            Self::disjoint()
        } else {
            Self {
                relation: Relation::Intersecting,
                points,
            }
        }
    }

    /// A shared piece with the given bounds.
    #[must_use]
    pub fn coincident(points: Vec<Point3>) -> Self {
        Self {
            relation: Relation::Coincident,
            points,
        }
    }
}

/// The intersection capabilities required from a geometry kernel.
pub trait GeometryKernel {
    /// Intersects two curves.
    fn intersect_curves(&self, a: &Curve, b: &Curve) -> Intersection;

    /// Intersects a line with a bounded planar face.
    fn intersect_face_line(&self, face: &PlanarFace, line: &Line) -> Intersection;
}
