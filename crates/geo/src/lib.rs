//! Distance utilities for the Ferias de Montevideo market finder.
//!
//! This crate provides:
//! - Haversine distance calculations, rounded for display
//! - Human-readable distance formatting ("500 m", "2.3 km")
//! - Proximity buckets ("Muy cerca" .. "Lejos")
//! - Stable nearest-first sorting of anything with a location
//! - WASM bindings for browser usage
//!
//! Nothing here performs I/O or validates coordinate ranges: any pair of
//! floats is accepted and produces a distance.
//!
//! # Example
//!
//! ```
//! use ferias_geo::{distance_km, format_distance, Coordinate};
//!
//! let tristan_narvaja = Coordinate::new(-34.9011, -56.1881);
//! let mercado_del_puerto = Coordinate::new(-34.9059, -56.2081);
//!
//! let km = distance_km(&tristan_narvaja, &mercado_del_puerto);
//! assert_eq!(format_distance(km), "1.9 km");
//! ```

mod display;
mod error;
mod haversine;
pub mod batch;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{annotate_distances, nearest_first, sort_by_distance, DistanceAnnotation, Located};
pub use display::{classify_distance, format_distance, DistanceCategory};
pub use error::{GeoError, Result};
pub use haversine::{distance_km, haversine_distance, EARTH_RADIUS_KM};

use std::str::FromStr;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check is made; see [`Coordinate::is_valid`].
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` (whitespace around either part is ignored).
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidFormat(format!("expected \"lat,lng\", got {s:?}")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::InvalidFormat(format!("{part:?}: {e}")))
        };

        let coord = Self::new(parse(lat)?, parse(lng)?);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(coord.to_string()))
        }
    }
}
