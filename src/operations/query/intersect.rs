use crate::geometry::{Curve, Line, PlanarFace};
use crate::kernel::{GeometryKernel, Relation};
use crate::math::{Point3, Vector3};

/// Points where two curves intersect.
///
/// Returns `None` unless the kernel reports [`Relation::Intersecting`].
#[must_use]
pub fn intersect_pair<K: GeometryKernel + ?Sized>(
    kernel: &K,
    a: &Curve,
    b: &Curve,
) -> Option<Vec<Point3>> {
    let hit = kernel.intersect_curves(a, b);
    (hit.relation == Relation::Intersecting).then_some(hit.points)
}

/// Collects the intersection points of every unordered pair of `curves`.
///
/// Pairs are visited with the outer index descending from the last curve
/// and the inner index descending below it; points keep the kernel's
/// order. Only [`Relation::Intersecting`] pairs contribute, and points
/// shared by several pairs are repeated.
#[must_use]
pub fn intersect_all<K: GeometryKernel + ?Sized>(kernel: &K, curves: &[Curve]) -> Vec<Point3> {
    let mut points = Vec::new();
    for i in (1..curves.len()).rev() {
        for j in (0..i).rev() {
            if let Some(found) = intersect_pair(kernel, &curves[i], &curves[j]) {
                points.extend(found);
            }
        }
    }
    points
}

/// Single intersection point of two lines.
///
/// Returns the first point of an [`Relation::Intersecting`] result. A
/// collinear overlap ([`Relation::Coincident`]) is not an intersection
/// point and yields `None`.
#[must_use]
pub fn intersect_lines<K: GeometryKernel + ?Sized>(kernel: &K, a: &Line, b: &Line) -> Option<Point3> {
    let hit = kernel.intersect_curves(&Curve::Line(a.clone()), &Curve::Line(b.clone()));
    match hit.relation {
        Relation::Intersecting => hit.points.first().copied(),
        Relation::Disjoint | Relation::Coincident => None,
    }
}

/// First point where `line` meets `face`, including a line lying in the
/// face (its first point along the line).
#[must_use]
pub fn intersect_face<K: GeometryKernel + ?Sized>(
    kernel: &K,
    face: &PlanarFace,
    line: &Line,
) -> Option<Point3> {
    let hit = kernel.intersect_face_line(face, line);
    if hit.relation == Relation::Disjoint {
        return None;
    }
    hit.points.first().copied()
}

/// Sorts points by their scalar projection onto `direction`.
#[must_use]
pub fn order_along(mut points: Vec<Point3>, direction: &Vector3) -> Vec<Point3> {
    points.sort_by(|a, b| a.coords.dot(direction).total_cmp(&b.coords.dot(direction)));
    points
}
