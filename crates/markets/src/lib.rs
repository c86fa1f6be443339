//! Montevideo street markets: dataset, filtering and site output
//!
//! - [`MarketsData`]: markets keyed by day, from the built-in dataset or a JSON file
//! - [`filter_markets`]: day/neighborhood filtering with nearest-first ordering
//! - Catalog queries on [`MarketsData`] (slugs, related markets, neighborhoods)
//! - [`validate::validate_dataset`]: consistency checks before publishing
//! - [`seo`]: sitemap.xml and schema.org JSON-LD
//!
//! # Example
//!
//! ```
//! use ferias_geo::Coordinate;
//! use ferias_markets::{filter_markets, Day, MarketFilter, MarketsData};
//!
//! let data = MarketsData::builtin().unwrap();
//! let filter = MarketFilter::all()
//!     .with_day(Day::Sunday)
//!     .with_origin(Coordinate::new(-34.9011, -56.1881));
//!
//! let listed = filter_markets(&data, &filter);
//! assert_eq!(listed[0].market.name, "Feria de Tristán Narvaja");
//! assert_eq!(listed[0].distance_km, Some(0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod model;
pub mod seo;
pub mod validate;

pub use catalog::{DayMarket, Neighborhood, RELATED_LIMIT};
pub use error::{MarketsError, Result};
pub use filter::{filter_markets, DayFilter, MarketFilter, MarketListing, NeighborhoodFilter, ALL};
pub use model::{neighborhood_label, Day, Market, MarketsData};
