//! Nearest-destination lookup for globe hover and click events.
//!
//! The renderer reports where the pointer ray meets the sphere; this maps that
//! point back to a destination with a linear scan over the table.

use tracing::trace;

use super::models::{to_cartesian, Location, Vec3};

/// Radius of the rendered globe in world units
pub const GLOBE_RADIUS: f64 = 100.0;

/// Maximum distance (world units) between the pointer hit and a destination
/// marker for the hit to count. About 7.5° of arc at `GLOBE_RADIUS`.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 13.0;

#[derive(Debug, Clone, Copy)]
pub struct GlobeResolver {
    radius: f64,
    threshold: f64,
}

impl Default for GlobeResolver {
    fn default() -> Self {
        Self::new(GLOBE_RADIUS, DEFAULT_MATCH_THRESHOLD)
    }
}

impl GlobeResolver {
    pub fn new(radius: f64, threshold: f64) -> Self {
        Self { radius, threshold }
    }

    /// Marker position of a destination on this globe
    pub fn position_of(&self, location: &Location) -> Vec3 {
        to_cartesian(location.latitude, location.longitude, self.radius)
    }

    /// Find the destination nearest to `point`, or `None` when nothing is
    /// within the threshold.
    ///
    /// Exact ties go to the earlier entry in `locations`.
    pub fn resolve<'a>(&self, point: Vec3, locations: &'a [Location]) -> Option<&'a Location> {
        let mut nearest: Option<(&'a Location, f64)> = None;

        for location in locations {
            let distance = point.distance(&self.position_of(location));
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((location, distance)),
            }
        }

        let (location, distance) = nearest?;
        trace!(location = location.id, distance, "Nearest globe marker");

        (distance <= self.threshold).then_some(location)
    }
}
