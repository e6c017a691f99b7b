use crate::geometry::{Arc, Curve, Line, PlanarFace, Plane};
use crate::math::intersect_3d::{
    line_plane_intersect, plane_plane_intersect, LinePlaneRelation, PlanePairRelation,
};
use crate::math::{Point3, Vector3, POINT_TOLERANCE};

use super::{GeometryKernel, Intersection};

/// Closed-form intersection kernel for lines, circular arcs and planar
/// faces.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticKernel {
    tolerance: f64,
}

impl AnalyticKernel {
    /// Creates a kernel that treats points within `tolerance` as equal.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Returns the point tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for AnalyticKernel {
    fn default() -> Self {
        Self::new(POINT_TOLERANCE)
    }
}

impl GeometryKernel for AnalyticKernel {
    fn intersect_curves(&self, a: &Curve, b: &Curve) -> Intersection {
        match (a, b) {
            (Curve::Line(a), Curve::Line(b)) => line_line(a, b, self.tolerance),
            (Curve::Line(line), Curve::Arc(arc)) | (Curve::Arc(arc), Curve::Line(line)) => {
                line_arc(line, arc, self.tolerance)
            }
            (Curve::Arc(a), Curve::Arc(b)) => arc_arc(a, b, self.tolerance),
        }
    }

    fn intersect_face_line(&self, face: &PlanarFace, line: &Line) -> Intersection {
        face_line(face, line, self.tolerance)
    }
}

/// Whether parameter `t` lies within the extent of `line`.
fn within(line: &Line, t: f64, tol: f64) -> bool {
    match line.length() {
        Some(len) => t >= -tol && t <= len + tol,
        None => true,
    }
}

/// Parameter interval of `line`, infinite for an unbounded line.
fn extent(line: &Line) -> (f64, f64) {
    line.length()
        .map_or((f64::NEG_INFINITY, f64::INFINITY), |len| (0.0, len))
}

fn line_line(a: &Line, b: &Line, tol: f64) -> Intersection {
    let d1 = a.direction();
    let d2 = b.direction();
    let w = a.origin() - b.origin();

    if d1.cross(d2).norm() < POINT_TOLERANCE {
        // Parallel: either apart or collinear.
        if (w - d1 * w.dot(d1)).norm() > tol {
            return Intersection::disjoint();
        }
        let (a_lo, a_hi) = extent(a);
        let (b_lo, b_hi) = match b.length() {
            Some(len) => {
                let s0 = a.parameter_of(b.origin());
                let s1 = a.parameter_of(&(b.origin() + d2 * len));
                (s0.min(s1), s0.max(s1))
            }
            None => (f64::NEG_INFINITY, f64::INFINITY),
        };
        let lo = a_lo.max(b_lo);
        let hi = a_hi.min(b_hi);
        if hi < lo - tol {
            return Intersection::disjoint();
        }
        if hi - lo <= tol {
            return Intersection::at(vec![a.origin() + d1 * (0.5 * (lo + hi))]);
        }
        let bounds = if lo.is_finite() && hi.is_finite() {
            vec![a.origin() + d1 * lo, a.origin() + d1 * hi]
        } else {
            Vec::new()
        };
        return Intersection::coincident(bounds);
    }

    // Closest points of the two carrier lines.
    let c = d1.dot(d2);
    let d = d1.dot(&w);
    let e = d2.dot(&w);
    let denom = 1.0 - c * c;
    let s = (c * e - d) / denom;
    let t = (e - c * d) / denom;

    let q1 = a.origin() + d1 * s;
    let q2 = b.origin() + d2 * t;
    if (q2 - q1).norm() > tol || !within(a, s, tol) || !within(b, t, tol) {
        return Intersection::disjoint();
    }
    Intersection::at(vec![q1 + (q2 - q1) * 0.5])
}

/// Parameters where the line `origin + t * dir` (unit `dir`, lying in the
/// circle's plane) meets the circle.
fn line_circle_params(origin: &Point3, dir: &Vector3, center: &Point3, radius: f64, tol: f64) -> Vec<f64> {
    let f = origin - center;
    let t0 = -f.dot(dir);
    let dist = (f + dir * t0).norm();
    if dist > radius + tol {
        Vec::new()
    } else if (dist - radius).abs() <= tol {
        vec![t0]
    } else {
        let half = (radius * radius - dist * dist).sqrt();
        vec![t0 - half, t0 + half]
    }
}

fn line_arc(line: &Line, arc: &Arc, tol: f64) -> Intersection {
    let n = arc.normal();
    let dir = line.direction();
    let denom = n.dot(dir);

    let params = if denom.abs() > POINT_TOLERANCE {
        vec![n.dot(&(arc.center() - line.origin())) / denom]
    } else if n.dot(&(line.origin() - arc.center())).abs() > tol {
        Vec::new()
    } else {
        line_circle_params(line.origin(), dir, arc.center(), arc.radius(), tol)
    };

    let points = params
        .into_iter()
        .filter(|&t| within(line, t, tol))
        .map(|t| line.origin() + dir * t)
        .filter(|p| arc.contains_point(p, tol))
        .collect();
    Intersection::at(points)
}

fn arc_arc(a: &Arc, b: &Arc, tol: f64) -> Intersection {
    let (Ok(plane_a), Ok(plane_b)) = (
        Plane::new(*a.center(), *a.normal()),
        Plane::new(*b.center(), *b.normal()),
    ) else {
        return Intersection::disjoint();
    };

    match plane_plane_intersect(&plane_a, &plane_b, tol) {
        PlanePairRelation::Parallel { .. } => Intersection::disjoint(),
        PlanePairRelation::Coincident => coplanar_arcs(a, b, tol),
        PlanePairRelation::IntersectionLine { origin, direction } => {
            let points = line_circle_params(&origin, &direction, a.center(), a.radius(), tol)
                .into_iter()
                .map(|t| origin + direction * t)
                .filter(|p| a.contains_point(p, tol) && b.contains_point(p, tol))
                .collect();
            Intersection::at(points)
        }
    }
}

fn coplanar_arcs(a: &Arc, b: &Arc, tol: f64) -> Intersection {
    let offset = b.center() - a.center();
    let dist = offset.norm();
    let (ra, rb) = (a.radius(), b.radius());

    if dist <= tol {
        if (ra - rb).abs() <= tol {
            // Same circle: a shared piece whose bounds are not computed.
            return Intersection::coincident(Vec::new());
        }
        return Intersection::disjoint();
    }
    if dist > ra + rb + tol || dist < (ra - rb).abs() - tol {
        return Intersection::disjoint();
    }

    let along = (ra * ra - rb * rb + dist * dist) / (2.0 * dist);
    let base = a.center() + offset * (along / dist);
    let h = (ra * ra - along * along).max(0.0).sqrt();
    let candidates = if h <= tol {
        vec![base]
    } else {
        let perp = a.normal().cross(&offset).normalize();
        vec![base - perp * h, base + perp * h]
    };

    let points = candidates
        .into_iter()
        .filter(|p| a.contains_point(p, tol) && b.contains_point(p, tol))
        .collect();
    Intersection::at(points)
}

fn face_line(face: &PlanarFace, line: &Line, tol: f64) -> Intersection {
    match line_plane_intersect(line.origin(), line.direction(), face.plane(), tol) {
        LinePlaneRelation::Point { point, t } => {
            if within(line, t, tol) && face.contains(&point) {
                Intersection::at(vec![point])
            } else {
                Intersection::disjoint()
            }
        }
        LinePlaneRelation::Parallel => Intersection::disjoint(),
        LinePlaneRelation::OnPlane => line_in_face_plane(face, line, tol),
    }
}

/// A line lying in the face plane: reports the boundary crossings and any
/// line endpoint inside the face, ordered along the line.
fn line_in_face_plane(face: &PlanarFace, line: &Line, tol: f64) -> Intersection {
    let boundary = face.boundary();
    let n = boundary.len();
    let mut hits: Vec<(f64, Point3)> = Vec::new();

    let mut push = |p: Point3| {
        let t = line.parameter_of(&p);
        if hits.iter().all(|(_, q)| (q - p).norm() > tol) {
            hits.push((t, p));
        }
    };

    if let Ok((start, end)) = line.endpoints() {
        for p in [start, end] {
            if face.contains(&p) {
                push(p);
            }
        }
    }
    for i in 0..n {
        let Ok(edge) = Line::bound(boundary[i], boundary[(i + 1) % n]) else {
            continue;
        };
        let found = line_line(line, &edge, tol);
        for p in found.points {
            push(p);
        }
    }

    if hits.is_empty() {
        return Intersection::disjoint();
    }
    hits.sort_by(|x, y| x.0.total_cmp(&y.0));
    Intersection::coincident(hits.into_iter().map(|(_, p)| p).collect())
}
