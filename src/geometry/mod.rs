pub mod curve;
pub mod curve_loop;
pub mod surface;

pub use curve::{Arc, Curve, Line};
pub use curve_loop::CurveLoop;
pub use surface::{PlanarFace, Plane};
