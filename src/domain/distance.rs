//! Great-circle distance between two coordinates.

use crate::domain::entities::Coordinate;

/// Mean Earth radius in miles (6371 km).
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Returns the haversine distance in miles between `from` and `to`.
///
/// Symmetric in its arguments and zero for identical points.
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
