mod rotate_about_axis;

pub use rotate_about_axis::RotateAboutAxis;
