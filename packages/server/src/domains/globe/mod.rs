//! Globe domain - static destination data and pointer hit-testing
//!
//! Responsibilities:
//! - The compiled-in table of exchange destinations and their programs
//! - Mapping a pointer/sphere intersection point to the nearest destination
//! - Hub-to-destination arcs for the globe visualization

pub mod arcs;
pub mod data;
pub mod dataset;
pub mod models;
pub mod resolver;

pub use arcs::build_arcs;
pub use dataset::{find_location, find_program, locations, HUB};
pub use models::{to_cartesian, GlobeArc, Location, Program, Vec3};
pub use resolver::GlobeResolver;
