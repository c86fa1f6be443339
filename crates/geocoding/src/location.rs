//! Device location seam
//!
//! A browser exposes the visitor's position through the Geolocation API; a
//! CLI has no such thing, so the position comes from a flag or not at all.
//! Both shapes sit behind [`LocationProvider`].

use crate::error::GeocodeError;
use ferias_geo::Coordinate;
use std::future::Future;
use std::time::Duration;

/// Options passed to the platform when requesting a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Ask for GPS-grade accuracy
    pub high_accuracy: bool,
    /// Give up after this long
    pub timeout: Duration,
    /// Accept a cached fix up to this old
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

/// Failure reasons reported by a platform location service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFailure {
    /// The user or platform denied access
    PermissionDenied,
    /// No position could be determined
    PositionUnavailable,
    /// No fix within [`PositionOptions::timeout`]
    Timeout,
    /// Anything else
    Other(String),
}

impl From<LocationFailure> for GeocodeError {
    fn from(failure: LocationFailure) -> Self {
        match failure {
            LocationFailure::PermissionDenied => Self::PermissionDenied,
            LocationFailure::PositionUnavailable => Self::PositionUnavailable,
            LocationFailure::Timeout => Self::Timeout,
            LocationFailure::Other(detail) => Self::location(detail),
        }
    }
}

/// Source of the device's current position
pub trait LocationProvider {
    /// Whether this platform can report a position at all
    fn is_supported(&self) -> bool;

    /// Request the current position
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, LocationFailure>> + Send;
}

/// A position known up front, e.g. from `--lat/--lng`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self, _options: PositionOptions) -> Result<Coordinate, LocationFailure> {
        Ok(self.0)
    }
}

/// No location capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self, _options: PositionOptions) -> Result<Coordinate, LocationFailure> {
        Err(LocationFailure::PositionUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PositionOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::from_secs(300));
    }

    #[test]
    fn test_failure_mapping() {
        assert_eq!(GeocodeError::from(LocationFailure::PermissionDenied), GeocodeError::PermissionDenied);
        assert_eq!(
            GeocodeError::from(LocationFailure::PositionUnavailable),
            GeocodeError::PositionUnavailable
        );
        assert_eq!(GeocodeError::from(LocationFailure::Timeout), GeocodeError::Timeout);
        assert_eq!(
            GeocodeError::from(LocationFailure::Other("kaput".into())),
            GeocodeError::location("kaput")
        );
    }

    #[tokio::test]
    async fn test_fixed_location() {
        let here = Coordinate::new(-34.9, -56.16);
        let provider = FixedLocation(here);
        assert!(provider.is_supported());
        assert_eq!(provider.current_position(PositionOptions::default()).await, Ok(here));
    }

    #[test]
    fn test_no_location() {
        assert!(!NoLocation.is_supported());
    }
}
