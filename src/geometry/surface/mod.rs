mod face;
mod plane;

pub use face::PlanarFace;
pub use plane::Plane;
