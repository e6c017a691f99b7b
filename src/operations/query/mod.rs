mod intersect;
mod point_in_region;

pub use intersect::{intersect_all, intersect_face, intersect_lines, intersect_pair, order_along};
pub use point_in_region::PointInRegion;
