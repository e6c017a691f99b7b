pub mod angle;
pub mod intersect_3d;
pub mod project;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default distance under which two curve endpoints are considered joined
/// when chaining: a sixteenth of an inch, expressed in feet.
pub const CHAIN_TOLERANCE: f64 = 1.0 / 12.0 / 16.0;

/// Default threshold for degenerate results: near-zero directions,
/// collinear neighbours, collapsed projections.
pub const DEGENERACY_TOLERANCE: f64 = 1e-6;

/// Default distance under which two points are considered equal.
pub const POINT_TOLERANCE: f64 = 1e-9;

/// Set of tolerances used by the algorithms in this crate.
///
/// The magnitudes depend on the unit system of the caller, so every
/// operation that compares distances accepts one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum gap between curve endpoints that still counts as joined.
    pub chain: f64,
    /// Threshold below which a length, cross product or projection is
    /// treated as zero.
    pub degeneracy: f64,
    /// General point equality.
    pub point: f64,
}

impl Tolerance {
    /// Returns a copy with a different chaining tolerance.
    #[must_use]
    pub fn with_chain(mut self, chain: f64) -> Self {
        self.chain = chain;
        self
    }

    /// Returns a copy with a different degeneracy tolerance.
    #[must_use]
    pub fn with_degeneracy(mut self, degeneracy: f64) -> Self {
        self.degeneracy = degeneracy;
        self
    }

    /// Returns a copy with a different point tolerance.
    #[must_use]
    pub fn with_point(mut self, point: f64) -> Self {
        self.point = point;
        self
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            chain: CHAIN_TOLERANCE,
            degeneracy: DEGENERACY_TOLERANCE,
            point: POINT_TOLERANCE,
        }
    }
}

/// Returns whether two points are within `tolerance` of each other.
#[must_use]
pub fn points_almost_equal(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    nalgebra::distance(a, b) <= tolerance
}
