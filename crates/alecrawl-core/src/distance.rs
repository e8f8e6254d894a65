//! Great-circle distance between coordinate pairs.

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two points given in decimal degrees.
///
/// Pure and symmetric, with `distance_miles(p, p) == 0`. Coordinates are
/// assumed finite; candidate filtering upstream guarantees that before
/// anything reaches the planner.
#[must_use]
pub fn distance_miles(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
