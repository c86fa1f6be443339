//! Error types for address and location lookups
//!
//! Every failure inside the adapter is converted into a [`GeocodeError`]; its
//! `Display` output is the Spanish message shown to site visitors.

use ferias_core::ErrorCode;
use serde::Serialize;
use thiserror::Error;

/// Lookup failures, one variant per user-visible condition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// Blank or whitespace-only address
    #[error("Por favor ingresa una dirección")]
    EmptyInput,

    /// The provider returned zero results
    #[error("No se encontró la dirección. Intenta con una dirección más específica.")]
    NotFound,

    /// The first result's latitude/longitude are not finite numbers
    #[error("Coordenadas inválidas obtenidas")]
    InvalidCoordinates,

    /// Network failure, timeout, non-success status or unreadable body
    #[error("Error al buscar la dirección")]
    ProviderUnavailable {
        /// Diagnostic detail for logs; not shown to users
        detail: String,
    },

    /// No device location capability
    #[error("La geolocalización no está disponible en este navegador")]
    UnsupportedPlatform,

    /// The user or platform refused location access
    #[error("Permiso de ubicación denegado")]
    PermissionDenied,

    /// The platform could not determine a position
    #[error("Ubicación no disponible")]
    PositionUnavailable,

    /// No position fix within the requested timeout
    #[error("Tiempo de espera agotado")]
    Timeout,

    /// Any other platform location failure
    #[error("Error al obtener la ubicación")]
    LocationError {
        /// Diagnostic detail for logs; not shown to users
        detail: String,
    },
}

/// Tag identifying a [`GeocodeError`] without its payload
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeErrorKind {
    EmptyInput,
    NotFound,
    InvalidCoordinates,
    ProviderUnavailable,
    UnsupportedPlatform,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    LocationError,
}

impl GeocodeError {
    /// Create a provider failure
    pub fn provider(detail: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            detail: detail.into(),
        }
    }

    /// Create a generic location failure
    pub fn location(detail: impl Into<String>) -> Self {
        Self::LocationError {
            detail: detail.into(),
        }
    }

    /// The error's tag
    #[must_use]
    pub fn kind(&self) -> GeocodeErrorKind {
        match self {
            Self::EmptyInput => GeocodeErrorKind::EmptyInput,
            Self::NotFound => GeocodeErrorKind::NotFound,
            Self::InvalidCoordinates => GeocodeErrorKind::InvalidCoordinates,
            Self::ProviderUnavailable { .. } => GeocodeErrorKind::ProviderUnavailable,
            Self::UnsupportedPlatform => GeocodeErrorKind::UnsupportedPlatform,
            Self::PermissionDenied => GeocodeErrorKind::PermissionDenied,
            Self::PositionUnavailable => GeocodeErrorKind::PositionUnavailable,
            Self::Timeout => GeocodeErrorKind::Timeout,
            Self::LocationError { .. } => GeocodeErrorKind::LocationError,
        }
    }

    /// User-facing message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Diagnostic detail, if the variant carries one
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ProviderUnavailable { detail } | Self::LocationError { detail } => Some(detail),
            _ => None,
        }
    }

    /// Whether the failure came from the device-location path
    #[must_use]
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform
                | Self::PermissionDenied
                | Self::PositionUnavailable
                | Self::Timeout
                | Self::LocationError { .. }
        )
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::provider(detail)
    }
}

impl From<GeocodeError> for ferias_core::Error {
    fn from(err: GeocodeError) -> Self {
        let code = match &err {
            GeocodeError::EmptyInput => ErrorCode::InvalidInput,
            GeocodeError::NotFound => ErrorCode::AddressNotFound,
            GeocodeError::InvalidCoordinates | GeocodeError::ProviderUnavailable { .. } => ErrorCode::GeocodingError,
            GeocodeError::Timeout => ErrorCode::Timeout,
            GeocodeError::UnsupportedPlatform
            | GeocodeError::PermissionDenied
            | GeocodeError::PositionUnavailable
            | GeocodeError::LocationError { .. } => ErrorCode::LocationUnavailable,
        };
        let converted = ferias_core::Error::new(code, err.message());
        let converted = match err.kind() {
            GeocodeErrorKind::EmptyInput => converted.with_suggestion("Pass a street address, e.g. \"18 de Julio 1234\""),
            GeocodeErrorKind::NotFound => converted.with_suggestion("Add a street number or a nearby corner"),
            _ => converted,
        };
        converted.with_source(err)
    }
}
