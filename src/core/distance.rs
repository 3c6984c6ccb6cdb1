use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two geo points.
///
/// Any non-finite coordinate yields the undefined distance, represented
/// as positive infinity. Callers treat infinity as "maximally
/// incompatible" — a listing with broken coordinates scores 0 on
/// location, it never crashes the pipeline.
#[inline]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if !a.is_valid() || !b.is_valid() {
        return f64::INFINITY;
    }

    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}
