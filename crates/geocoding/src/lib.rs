//! Address and device-location lookup for the Ferias de Montevideo tools
//!
//! This crate turns what a visitor types ("18 de Julio y Ejido") or where
//! their device is into a [`ferias_geo::Coordinate`] usable as a distance
//! origin.
//!
//! # Features
//!
//! - **Nominatim client**: one `/search` request per lookup, no retries
//! - **Rate limiting**: requests wait their turn instead of failing
//! - **Typed errors**: every failure becomes a [`GeocodeError`] with a Spanish message
//! - **Loading/error slot**: [`GeocodingAdapter`] tracks the in-flight flag and latest error
//! - **Request correlation**: each request carries a unique ID for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use ferias_geocoding::{GeocodingAdapter, NominatimClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = GeocodingAdapter::new(NominatimClient::new()?);
//!
//!     let origin = adapter.geocode_address("Plaza Independencia").await?;
//!     println!("{} -> {}", origin.display_address, origin.coordinate);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod provider;

pub use adapter::{
    AdapterState, GeocodeResult, GeocodingAdapter, CURRENT_LOCATION_LABEL, DEFAULT_LOCALITY_SUFFIX,
};
pub use client::NominatimClient;
pub use config::ClientConfig;
pub use error::{GeocodeError, GeocodeErrorKind};
pub use location::{FixedLocation, LocationFailure, LocationProvider, NoLocation, PositionOptions};
pub use provider::{GeocodingProvider, Place};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::{GeocodeResult, GeocodingAdapter};
    pub use crate::client::NominatimClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{GeocodeError, GeocodeErrorKind};
    pub use crate::location::{FixedLocation, LocationProvider, NoLocation};
    pub use crate::provider::GeocodingProvider;
}
