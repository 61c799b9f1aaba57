use std::f64::consts::PI;

use super::models::{GlobeArc, Location};
use crate::common::utils::{calculate_distance_km, central_angle};

const ARC_COLORS: &[&str] = &["#38bdf8", "#a78bfa", "#f472b6"];

const MIN_ARC_ALT: f64 = 0.08;
const MAX_ARC_ALT: f64 = 0.5;

/// Peak altitude for an arc spanning `angle` radians
///
/// Longer hops rise higher so they clear the curvature of the globe.
pub fn arc_altitude(angle: f64) -> f64 {
    (MIN_ARC_ALT + (MAX_ARC_ALT - MIN_ARC_ALT) * angle / PI).clamp(MIN_ARC_ALT, MAX_ARC_ALT)
}

/// One arc from `hub` to each destination, in table order
pub fn build_arcs(hub: (f64, f64), locations: &[Location]) -> Vec<GlobeArc> {
    let (hub_lat, hub_lng) = hub;

    locations
        .iter()
        .enumerate()
        .map(|(index, location)| {
            let angle = central_angle(hub_lat, hub_lng, location.latitude, location.longitude);
            GlobeArc {
                start_lat: hub_lat,
                start_lng: hub_lng,
                end_lat: location.latitude,
                end_lng: location.longitude,
                arc_alt: arc_altitude(angle),
                distance_km: calculate_distance_km(
                    hub_lat,
                    hub_lng,
                    location.latitude,
                    location.longitude,
                ),
                color: ARC_COLORS[index % ARC_COLORS.len()],
                order: index as u32 + 1,
            }
        })
        .collect()
}
