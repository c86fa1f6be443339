//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Address lookup provider settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Public site settings (sitemap, structured data)
    #[serde(default)]
    pub site: SiteConfig,

    /// Market dataset source
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Geocoding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of a Nominatim-compatible search service
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,

    /// User-Agent sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Appended to every query to bias results toward the city
    #[serde(default = "default_locality_suffix")]
    pub locality_suffix: String,

    /// Maximum lookups per second
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            locality_suffix: default_locality_suffix(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!("ferias-tools/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_locality_suffix() -> String {
    "Montevideo, Uruguay".to_string()
}

fn default_requests_per_second() -> u32 {
    1
}

/// Public site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical origin used for sitemap and JSON-LD URLs
    #[serde(default = "default_site_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_site_url(),
        }
    }
}

fn default_site_url() -> String {
    "https://feriasdemontevideo.com".to_string()
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatasetConfig {
    /// JSON file with markets keyed by day; the embedded dataset is used when unset
    #[serde(default)]
    pub path: Option<String>,
}
