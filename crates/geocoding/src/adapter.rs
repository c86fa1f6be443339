//! Address and device-location lookup with a single loading/error slot
//!
//! [`GeocodingAdapter`] owns one [`AdapterState`]: an in-flight flag and the
//! latest error. Calls on one adapter are queued, so a second lookup starts
//! only after the first has resolved and the visible state always belongs to
//! the call that finished last *and* started last.

use crate::error::GeocodeError;
use crate::location::{LocationProvider, NoLocation, PositionOptions};
use crate::provider::GeocodingProvider;
use ferias_geo::Coordinate;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Suffix appended to every address query
pub const DEFAULT_LOCALITY_SUFFIX: &str = "Montevideo, Uruguay";

/// Label used for device-location results
pub const CURRENT_LOCATION_LABEL: &str = "Mi ubicación actual";

/// A resolved origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    /// Text shown to the user for this origin
    pub display_address: String,
    /// Resolved position
    pub coordinate: Coordinate,
}

/// Snapshot of the adapter's loading/error slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterState {
    /// Whether a lookup is running
    pub is_loading: bool,
    /// Error from the most recent lookup, if it failed
    pub latest_error: Option<GeocodeError>,
}

/// Turns addresses or the device position into coordinates
pub struct GeocodingAdapter<P, L = NoLocation> {
    provider: P,
    location: L,
    locality_suffix: String,
    position_options: PositionOptions,
    queue: tokio::sync::Mutex<()>,
    state: Mutex<AdapterState>,
}

impl<P: GeocodingProvider> GeocodingAdapter<P, NoLocation> {
    /// Adapter without device-location support
    pub fn new(provider: P) -> Self {
        Self::with_location(provider, NoLocation)
    }
}

impl<P: GeocodingProvider, L: LocationProvider> GeocodingAdapter<P, L> {
    /// Adapter with a device-location provider
    pub fn with_location(provider: P, location: L) -> Self {
        Self {
            provider,
            location,
            locality_suffix: DEFAULT_LOCALITY_SUFFIX.to_string(),
            position_options: PositionOptions::default(),
            queue: tokio::sync::Mutex::new(()),
            state: Mutex::new(AdapterState::default()),
        }
    }

    /// Replace the locality suffix; an empty suffix sends the bare address
    #[must_use]
    pub fn with_locality_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.locality_suffix = suffix.into();
        self
    }

    /// Replace the options sent with device-location requests
    #[must_use]
    pub fn with_position_options(mut self, options: PositionOptions) -> Self {
        self.position_options = options;
        self
    }

    /// The wrapped geocoding provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Query actually sent to the provider for `address`
    #[must_use]
    pub fn query_for(&self, address: &str) -> String {
        let address = address.trim();
        let suffix = self.locality_suffix.trim();
        if suffix.is_empty() {
            address.to_string()
        } else {
            format!("{address}, {suffix}")
        }
    }

    /// Resolve a free-text address
    ///
    /// Blank input fails with [`GeocodeError::EmptyInput`] without contacting
    /// the provider. Only the first result is used.
    pub async fn geocode_address(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let _turn = self.queue.lock().await;
        let _loading = self.begin();

        let result = self.lookup(address).await;
        self.finish(&result);
        result
    }

    /// Resolve the device's current position
    pub async fn current_location(&self) -> Result<GeocodeResult, GeocodeError> {
        let _turn = self.queue.lock().await;
        let _loading = self.begin();

        let result = self.locate().await;
        self.finish(&result);
        result
    }

    /// Clear the latest error without touching the loading flag
    pub fn clear_error(&self) {
        self.slot().latest_error = None;
    }

    /// Whether a lookup is running
    pub fn is_loading(&self) -> bool {
        self.slot().is_loading
    }

    /// Error from the most recent lookup
    pub fn latest_error(&self) -> Option<GeocodeError> {
        self.slot().latest_error.clone()
    }

    /// Copy of the whole state slot
    pub fn state(&self) -> AdapterState {
        self.slot().clone()
    }

    async fn lookup(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyInput);
        }

        let query = self.query_for(trimmed);
        debug!(query = %query, "Geocoding address");

        let places = self.provider.search(&query).await?;
        let first = places.first().ok_or(GeocodeError::NotFound)?;
        let coordinate = first.coordinate().ok_or(GeocodeError::InvalidCoordinates)?;

        Ok(GeocodeResult {
            display_address: trimmed.to_string(),
            coordinate,
        })
    }

    async fn locate(&self) -> Result<GeocodeResult, GeocodeError> {
        if !self.location.is_supported() {
            return Err(GeocodeError::UnsupportedPlatform);
        }

        let coordinate = self.location.current_position(self.position_options).await?;

        Ok(GeocodeResult {
            display_address: CURRENT_LOCATION_LABEL.to_string(),
            coordinate,
        })
    }

    fn begin(&self) -> LoadingGuard<'_> {
        let mut slot = self.slot();
        slot.is_loading = true;
        slot.latest_error = None;
        LoadingGuard { state: &self.state }
    }

    fn finish(&self, result: &Result<GeocodeResult, GeocodeError>) {
        let mut slot = self.slot();
        slot.is_loading = false;
        slot.latest_error = result.as_ref().err().cloned();
        if let Some(err) = &slot.latest_error {
            debug!(kind = ?err.kind(), detail = ?err.detail(), "Lookup failed");
        }
    }

    fn slot(&self) -> MutexGuard<'_, AdapterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the loading flag when a call ends, including when its future is dropped
struct LoadingGuard<'a> {
    state: &'a Mutex<AdapterState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).is_loading = false;
    }
}

impl<P, L> std::fmt::Debug for GeocodingAdapter<P, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("locality_suffix", &self.locality_suffix)
            .field("position_options", &self.position_options)
            .finish_non_exhaustive()
    }
}
