//! Error types for dataset loading and lookups

use ferias_core::{Error, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for this crate
pub type Result<T> = std::result::Result<T, MarketsError>;

/// Dataset and lookup failures
#[derive(Error, Debug)]
pub enum MarketsError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON of the expected shape
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A day name that is neither a key like `monday` nor a Spanish name
    #[error("Unknown day '{0}'")]
    UnknownDay(String),

    /// No market with this slug
    #[error("Market not found: {0}")]
    NotFound(String),

    /// Sitemap XML could not be written
    #[error("Failed to render sitemap: {0}")]
    Render(String),
}

impl From<MarketsError> for Error {
    fn from(err: MarketsError) -> Self {
        match err {
            MarketsError::Io { path, source } => {
                let code = if source.kind() == std::io::ErrorKind::NotFound {
                    ErrorCode::FileNotFound
                } else {
                    ErrorCode::IoError
                };
                Error::new(code, format!("Failed to read dataset {}", path.display()))
                    .with_source(source)
                    .with_suggestion("Check the [dataset] path in ferias.toml or --dataset")
            }
            MarketsError::Parse(source) => Error::new(ErrorCode::DatasetParseError, "Invalid dataset JSON")
                .with_context(source.to_string())
                .with_source(source),
            MarketsError::UnknownDay(day) => Error::new(ErrorCode::InvalidInput, format!("Unknown day '{day}'"))
                .with_suggestion("Use monday..sunday, a Spanish day name, or 'all'"),
            MarketsError::NotFound(slug) => Error::market_not_found(&slug),
            MarketsError::Render(detail) => Error::new(ErrorCode::Internal, "Failed to render sitemap").with_context(detail),
        }
    }
}
