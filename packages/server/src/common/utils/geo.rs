/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Central angle between two coordinates in radians
///
/// Uses the Haversine formula, which stays accurate for the short
/// city-to-city hops as well as antipodal pairs.
pub fn central_angle(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Calculate distance between two coordinates in kilometers
pub fn calculate_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    EARTH_RADIUS_KM * central_angle(lat1, lng1, lat2, lng2)
}
