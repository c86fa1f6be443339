//! Core utilities for the Ferias de Montevideo tools
//!
//! This crate provides shared functionality used by the geocoding, markets and
//! CLI crates:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults for every field
//! - **Rate limiting**: Token bucket limiter for polite use of public APIs
//! - **Validation**: Fluent validator used to check market datasets
//!
//! # Example
//!
//! ```rust,no_run
//! use ferias_core::config::Config;
//!
//! let config = Config::load(None).expect("config");
//! println!("Geocoder: {}", config.schema.geocoding.base_url);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::rate_limit::{RateLimitConfig, RateLimiter};
    pub use crate::validation::{ValidationResult, Validator};
}
