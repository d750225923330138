// Distance calculation utilities

use crate::models::{Kilometers, Minutes};
use geo::Point;

/// Great-circle distance between two points (x = lng, y = lat, degrees),
/// rounded to the nearest whole kilometer.
///
/// Coordinates are not range checked.
pub fn haversine_distance_km(p1: Point<f64>, p2: Point<f64>, earth_radius_km: f64) -> Kilometers {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lng = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding error can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (earth_radius_km * c).round()
}

/// Minutes needed to cover `distance_km` at a constant speed
pub fn travel_time_minutes(distance_km: Kilometers, speed_kmh: f64) -> Minutes {
    distance_km * 60.0 / speed_kmh
}
