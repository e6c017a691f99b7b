#![allow(clippy::unwrap_used)]

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use geoweave::geometry::{Curve, CurveLoop, Line, Plane};
use geoweave::kernel::AnalyticKernel;
use geoweave::math::angle::signed_angle;
use geoweave::math::project::project_point;
use geoweave::math::{Point3, Vector3, CHAIN_TOLERANCE, DEGENERACY_TOLERANCE};
use geoweave::operations::chain::sorted_contiguous;
use geoweave::operations::offset::LoopOffset;
use geoweave::operations::query::PointInRegion;
use geoweave::operations::transform::RotateAboutAxis;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("geoweave=debug")
        .with_test_writer()
        .try_init();
}

/// Counter-clockwise regular polygon in the XY plane.
fn regular_polygon(sides: usize, radius: f64, phase: f64) -> Vec<Point3> {
    (0..sides)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let a = phase + TAU * i as f64 / sides as f64;
            Point3::new(radius * a.cos(), radius * a.sin(), 0.0)
        })
        .collect()
}

fn edges(points: &[Point3]) -> Vec<Curve> {
    let n = points.len();
    (0..n)
        .map(|i| Line::bound(points[i], points[(i + 1) % n]).unwrap().into())
        .collect()
}

fn vector() -> impl Strategy<Value = Vector3> {
    (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn point() -> impl Strategy<Value = Point3> {
    vector().prop_map(Point3::from)
}

proptest! {
    #[test]
    fn offset_out_and_back_restores_convex_loop(
        sides in 3usize..10,
        radius in 1.0..50.0f64,
        phase in 0.0..TAU,
        distance in 0.01..0.5f64,
    ) {
        init_tracing();
        let points = regular_polygon(sides, radius, phase);
        let original = CurveLoop::from_points(&points).unwrap();

        let grown = LoopOffset::new(original, distance).execute().unwrap();
        let restored = LoopOffset::new(grown, -distance).execute().unwrap();

        let verts = restored.vertices();
        prop_assert_eq!(verts.len(), points.len());
        for (a, e) in verts.iter().zip(&points) {
            assert_relative_eq!(*a, *e, epsilon = 1e-7);
        }
    }

    #[test]
    fn shuffled_polygon_edges_chain_back(
        sides in 3usize..12,
        radius in 1.0..20.0f64,
        order in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
        flips in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let all = edges(&regular_polygon(sides, radius, 0.3));
        let mut curves = Vec::with_capacity(sides);
        for &i in order.iter().filter(|&&i| i < sides) {
            let curve = &all[i];
            curves.push(if flips[i] { curve.reversed().unwrap() } else { curve.clone() });
        }

        let sorted = sorted_contiguous(&curves, CHAIN_TOLERANCE).unwrap();
        prop_assert_eq!(sorted.len(), sides);
        for pair in sorted.windows(2) {
            let end = pair[0].end_point().unwrap();
            let start = pair[1].start_point().unwrap();
            prop_assert!(nalgebra::distance(&end, &start) <= CHAIN_TOLERANCE);
        }
        prop_assert!(CurveLoop::new(sorted, CHAIN_TOLERANCE).is_ok());
    }

    #[test]
    fn projection_lands_on_plane_and_is_idempotent(
        origin in point(),
        normal in vector().prop_filter("non-zero normal", |n| n.norm() > 0.1),
        target in point(),
    ) {
        let plane = Plane::new(origin, normal).unwrap();
        let once = project_point(&target, &plane);
        let twice = project_point(&once, &plane);

        prop_assert!(plane.signed_distance(&once).abs() < 1e-9);
        assert_relative_eq!(once, twice, epsilon = 1e-9);
    }

    #[test]
    fn signed_angle_recovers_rotation_about_axis(theta in 0.01..(TAU - 0.01)) {
        prop_assume!((theta - PI).abs() > 1e-3);
        let a = Vector3::x();
        let b = Vector3::new(theta.cos(), theta.sin(), 0.0);

        let forward = signed_angle(&a, &b, &Vector3::z(), DEGENERACY_TOLERANCE);
        let backward = signed_angle(&b, &a, &Vector3::z(), DEGENERACY_TOLERANCE);

        prop_assert!((0.0..TAU).contains(&forward));
        assert_relative_eq!(forward, theta, epsilon = 1e-9);
        assert_relative_eq!(forward + backward, TAU, epsilon = 1e-9);
    }

    #[test]
    fn rotation_preserves_distance_and_full_turn_is_identity(
        start in point(),
        direction in vector().prop_filter("non-zero axis", |d| d.norm() > 0.1),
        target in point(),
        degrees in -720.0..720.0f64,
    ) {
        prop_assume!(nalgebra::distance(&start, &target) > 1e-3);
        let axis = Line::new(start, direction).unwrap();

        let rotated = RotateAboutAxis::new(axis.clone(), degrees).apply(&target).unwrap();
        assert_relative_eq!(
            nalgebra::distance(&rotated, &start),
            nalgebra::distance(&target, &start),
            epsilon = 1e-7
        );

        let full = RotateAboutAxis::new(axis, 360.0).apply(&target).unwrap();
        assert_relative_eq!(full, target, epsilon = 1e-7);
    }

    #[test]
    fn points_strictly_inside_square_are_inside(x in 0.05..0.95f64, y in 0.05..0.95f64) {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let query = PointInRegion::new(edges(&square), Plane::xy(), Vector3::x());
        let kernel = AnalyticKernel::default();

        prop_assert!(query.contains(&kernel, &Point3::new(x, y, 0.0)).unwrap());
        prop_assert!(!query.contains(&kernel, &Point3::new(x + 2.0, y, 0.0)).unwrap());
    }
}
