//! Error types for the geo crate.
//!
//! Distance computation itself is infallible; these errors come from parsing
//! coordinates supplied as text.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while reading coordinates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Text could not be split or parsed as two numbers
    #[error("Invalid coordinate format: {0}")]
    InvalidFormat(String),

    /// Values parsed but fall outside latitude/longitude ranges
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
