//! Per-invocation settings shared by all commands

use crate::Cli;
use anyhow::Result;
use ferias_cli::OutputFormat;
use ferias_core::config::Config;
use ferias_core::ResultExt;
use ferias_geocoding::{ClientConfig, GeocodingAdapter, LocationProvider, NominatimClient};
use ferias_markets::MarketsData;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Resolved configuration plus global flags
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    dataset_path: Option<PathBuf>,
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        if let Some(path) = &config.path {
            debug!(path = %path, "Loaded configuration");
        }

        let dataset_path = cli
            .dataset
            .clone()
            .or_else(|| config.schema.dataset.path.as_ref().map(PathBuf::from));

        Ok(Self {
            config,
            format: cli.format,
            dataset_path,
        })
    }

    /// The configured dataset, or the built-in one
    pub fn dataset(&self) -> Result<MarketsData> {
        let data = match &self.dataset_path {
            Some(path) => MarketsData::load(path)
                .map_err(ferias_core::Error::from)
                .context(format!("Loading market dataset from {}", path.display())),
            None => MarketsData::builtin().map_err(ferias_core::Error::from),
        };
        Ok(data?)
    }

    /// Geocoding adapter backed by the configured provider
    pub fn adapter<L: LocationProvider>(&self, location: L) -> Result<GeocodingAdapter<NominatimClient, L>> {
        let geocoding = &self.config.schema.geocoding;
        let client_config = ClientConfig::from_schema(geocoding).with_env_overrides();
        let client = NominatimClient::with_config(client_config)?;

        Ok(GeocodingAdapter::with_location(client, location).with_locality_suffix(geocoding.locality_suffix.clone()))
    }

    /// Canonical site origin for generated URLs
    pub fn site_url(&self) -> &str {
        &self.config.schema.site.base_url
    }

    pub fn is_json(&self) -> bool {
        self.format.is_json()
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
