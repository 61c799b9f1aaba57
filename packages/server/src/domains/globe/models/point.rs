use serde::{Deserialize, Serialize};

/// Point in the renderer's world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn length(&self) -> f64 {
        self.distance(&Vec3::ZERO)
    }
}

/// Convert latitude/longitude (degrees) to a point on a sphere of `radius`
///
/// Uses the globe renderer's basis: +Y is the north pole, longitude 0 lies on
/// +Z and longitude 90°E on +X.
pub fn to_cartesian(lat: f64, lng: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (90.0 - lng).to_radians();

    Vec3 {
        x: radius * phi.sin() * theta.cos(),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    }
}
