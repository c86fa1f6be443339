//! CLI command implementations

pub mod catalog;
pub mod distance;
pub mod geocode;
pub mod list;
pub mod show;
pub mod sitemap;
pub mod validate;
