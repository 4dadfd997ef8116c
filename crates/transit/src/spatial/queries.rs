//! Distance calculations on the Earth's surface.
//!
//! Uses the Haversine formula on the mean Earth radius. All results are in
//! meters, the same unit as measured road distances.

use geo::HaversineDistance;

/// Mean Earth radius in meters; mirrors geo's private `MEAN_EARTH_RADIUS`,
/// which `haversine_distance` uses.
const MEAN_EARTH_RADIUS: f64 = 6371008.8;

use crate::models::types::Coordinates;

/// Great-circle distance between two positions in meters
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    from.to_point().haversine_distance(&to.to_point())
}

/// Convert meters along a meridian to degrees of latitude.
///
/// Uses the same Earth radius as [`compute_distance`].
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / MEAN_EARTH_RADIUS.to_radians()
}

/// Degree radius that covers `meters` in every direction around `latitude`.
///
/// A degree of longitude shrinks with `cos(latitude)`. The widening uses the
/// latitude farthest from the equator that the circle reaches, so candidates
/// on its poleward edge are not cut off. Clamped near the poles.
pub fn search_radius_degrees(meters: f64, latitude: f64) -> f64 {
    let reach = meters_to_degrees(meters);
    let farthest = (latitude.abs() + reach).min(90.0);
    let shrink = farthest.to_radians().cos().max(0.01);
    reach / shrink
}
