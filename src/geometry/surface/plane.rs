use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, POINT_TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and a normal vector. The normal is kept as
/// supplied (it need not be unit length); two orthonormal in-plane
/// directions (`u_dir`, `v_dir`) are derived for local 2D coordinates.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
    u_dir: Vector3,
    v_dir: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn new(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < POINT_TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let unit = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if unit.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = unit.cross(&reference).normalize();
        let v_dir = unit.cross(&u_dir);

        Ok(Self {
            origin,
            normal,
            u_dir,
            v_dir,
        })
    }

    /// The XY plane through the world origin.
    #[must_use]
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            normal: Vector3::z(),
            u_dir: Vector3::x(),
            v_dir: Vector3::y(),
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the normal vector as supplied at construction.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn unit_normal(&self) -> Vector3 {
        self.normal.normalize()
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Signed distance from a point to the plane.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.unit_normal())
    }

    /// Coordinates of `point` along (`u_dir`, `v_dir`), ignoring its
    /// distance from the plane.
    #[must_use]
    pub fn to_local(&self, point: &Point3) -> (f64, f64) {
        let d = point - self.origin;
        (d.dot(&self.u_dir), d.dot(&self.v_dir))
    }
}
