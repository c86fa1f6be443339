//! Configuration loading and schema definitions
//!
//! Shared configuration types used by the geocoding client, the dataset loader
//! and the site generators.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
