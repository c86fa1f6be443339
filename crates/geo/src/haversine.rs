//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the unrounded great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use ferias_geo::{haversine_distance, Coordinate};
///
/// let montevideo = Coordinate::new(-34.9011, -56.1645);
/// let buenos_aires = Coordinate::new(-34.6037, -58.3816);
///
/// let distance = haversine_distance(&montevideo, &buenos_aires);
/// assert!((distance - 204.0).abs() < 5.0);
/// ```
#[inline]
#[must_use]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculates the great-circle distance in kilometers, rounded to 2 decimal places.
///
/// This is the value shown to users and used for ordering: rounding keeps
/// `distance_km(a, b) == distance_km(b, a)` exact and makes identical points
/// come out as exactly `0.0`.
///
/// # Example
/// ```
/// use ferias_geo::{distance_km, Coordinate};
///
/// let d = distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0));
/// assert_eq!(d, 111.19);
/// ```
#[inline]
#[must_use]
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    round_to_hundredths(haversine_distance(from, to))
}

#[inline]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
