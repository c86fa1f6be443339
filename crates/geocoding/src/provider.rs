//! Geocoding provider seam
//!
//! The adapter only needs "search by text, get zero or more places back".
//! [`crate::NominatimClient`] is the production implementation; tests plug in
//! fakes.

use crate::error::GeocodeError;
use ferias_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A free-text location search service
pub trait GeocodingProvider {
    /// Look up `query`, returning at most a handful of places, best match first
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Place>, GeocodeError>> + Send;
}

/// One search result
///
/// Latitude and longitude are kept as raw JSON because providers disagree on
/// whether they are strings (`"-34.90"`) or numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Latitude as returned by the provider
    #[serde(default)]
    pub lat: serde_json::Value,
    /// Longitude as returned by the provider
    #[serde(default)]
    pub lon: serde_json::Value,
    /// Provider's formatted address, if any
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Place {
    /// Build a place from numeric coordinates
    #[must_use]
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            lat: serde_json::json!(coordinate.latitude),
            lon: serde_json::json!(coordinate.longitude),
            display_name: None,
        }
    }

    /// Parsed coordinate, or `None` if either component is missing or not finite
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = parse_degrees(&self.lat)?;
        let lon = parse_degrees(&self.lon)?;
        Some(Coordinate::new(lat, lon))
    }
}

fn parse_degrees(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_coordinates() {
        let place: Place = serde_json::from_value(json!({
            "lat": "-34.9058916",
            "lon": "-56.1913095",
            "display_name": "Plaza Independencia, Ciudad Vieja, Montevideo"
        }))
        .unwrap();

        let coord = place.coordinate().unwrap();
        assert!((coord.latitude + 34.9058916).abs() < 1e-9);
        assert!((coord.longitude + 56.1913095).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_coordinates() {
        let place: Place = serde_json::from_value(json!({"lat": -34.9, "lon": -56.16})).unwrap();
        assert_eq!(place.coordinate(), Some(Coordinate::new(-34.9, -56.16)));
    }

    #[test]
    fn test_unparsable_coordinates() {
        let garbage: Place = serde_json::from_value(json!({"lat": "abc", "lon": "-56.1"})).unwrap();
        assert_eq!(garbage.coordinate(), None);

        let missing: Place = serde_json::from_value(json!({"display_name": "x"})).unwrap();
        assert_eq!(missing.coordinate(), None);

        let infinite: Place = serde_json::from_value(json!({"lat": "inf", "lon": "1"})).unwrap();
        assert_eq!(infinite.coordinate(), None);
    }
}
