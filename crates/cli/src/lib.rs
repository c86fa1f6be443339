//! Terminal helpers shared by the Ferias de Montevideo binaries
//!
//! Provides shared CLI functionality:
//! - Status messages and output format selection
//! - Distance badges colored by proximity
//! - Spinners for network lookups

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{OutputFormat, Status};
