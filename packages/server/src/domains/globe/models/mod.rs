pub mod location;
pub mod point;

pub use location::{GlobeArc, Location, Program};
pub use point::{to_cartesian, Vec3};
