//! Geocode command - resolve an address, plus origin resolution for `list`

use crate::context::{print_json, Context};
use crate::OriginArgs;
use anyhow::Result;
use ferias_cli::progress;
use ferias_cli::Status;
use ferias_geo::Coordinate;
use ferias_geocoding::{FixedLocation, GeocodeResult, NoLocation};

/// Run address lookup
pub async fn run(ctx: &Context, address: &str) -> Result<()> {
    let result = lookup_address(ctx, address).await?;

    if ctx.is_json() {
        return print_json(&result);
    }

    Status::success(&result.display_address);
    println!("  {}", result.coordinate);
    Ok(())
}

/// Resolve `--near` or `--lat/--lng` into an origin, if either was given
pub async fn resolve_origin(ctx: &Context, origin: &OriginArgs) -> Result<Option<GeocodeResult>> {
    if let (Some(lat), Some(lng)) = (origin.lat, origin.lng) {
        let adapter = ctx.adapter(FixedLocation(Coordinate::new(lat, lng)))?;
        let origin = adapter.current_location().await.map_err(ferias_core::Error::from)?;
        return Ok(Some(origin));
    }

    match origin.near.as_deref() {
        Some(address) => Ok(Some(lookup_address(ctx, address).await?)),
        None => Ok(None),
    }
}

async fn lookup_address(ctx: &Context, address: &str) -> Result<GeocodeResult> {
    let adapter = ctx.adapter(NoLocation)?;

    let spinner = (!ctx.is_json()).then(|| progress::spinner(&format!("Buscando \"{}\"...", address.trim())));
    let result = adapter.geocode_address(address).await;
    if let Some(pb) = &spinner {
        progress::finish_clear(pb);
    }

    Ok(result.map_err(ferias_core::Error::from)?)
}
