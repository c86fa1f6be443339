//! Input and dataset validation
//!
//! Provides a fluent validator plus the format checks shared by the dataset
//! loader and the CLI:
//! - Required fields and allowed values
//! - Numeric ranges (coordinates)
//! - Slugs and `HH:MM` times
//!
//! # Example
//!
//! ```rust
//! use ferias_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Feria de Tristán Narvaja")
//!     .slug("id", "tristan-narvaja")
//!     .range("lat", -34.9011, -90.0, 90.0)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    #[must_use]
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Prefix every field name, e.g. with the record being validated
    #[must_use]
    pub fn scoped(mut self, scope: &str) -> Self {
        for entry in self.errors.iter_mut().chain(self.warnings.iter_mut()) {
            entry.field = format!("{scope}.{}", entry.field);
        }
        self
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    fn fail(
        mut self,
        field: &str,
        message: String,
        code: &str,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Self {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            expected,
            actual,
        });
        self
    }

    /// Validate that a field is not empty
    #[must_use]
    pub fn required(self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            return self.fail(
                field,
                "Field is required".to_string(),
                "REQUIRED",
                Some("non-empty value".to_string()),
                Some("empty".to_string()),
            );
        }
        self
    }

    /// Validate a lowercase, hyphen-separated identifier
    #[must_use]
    pub fn slug(self, field: &str, value: &str) -> Self {
        if is_slug(value) {
            return self;
        }
        self.fail(
            field,
            "Must be a lowercase slug (a-z, 0-9, single hyphens)".to_string(),
            "SLUG",
            Some("slug".to_string()),
            Some(value.to_string()),
        )
    }

    /// Validate a 24h `HH:MM` time
    #[must_use]
    pub fn time_of_day(self, field: &str, value: &str) -> Self {
        if is_time_of_day(value) {
            return self;
        }
        self.fail(
            field,
            "Must be a 24h time like 08:00".to_string(),
            "TIME",
            Some("HH:MM".to_string()),
            Some(value.to_string()),
        )
    }

    /// Validate a numeric range (inclusive)
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(self, field: &str, value: T, min: T, max: T) -> Self {
        // NaN fails both comparisons.
        if value >= min && value <= max {
            return self;
        }
        self.fail(
            field,
            format!("Must be between {min} and {max}"),
            "RANGE",
            Some(format!("{min} - {max}")),
            Some(value.to_string()),
        )
    }

    /// Add a warning (non-blocking)
    #[must_use]
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    #[must_use]
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Whether `value` is a lowercase hyphenated slug
#[must_use]
pub fn is_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

/// Whether `value` is a 24h `HH:MM` time
#[must_use]
pub fn is_time_of_day(value: &str) -> bool {
    TIME_RE.is_match(value)
}
