//! Distance command - haversine distance between two points

use crate::context::{print_json, Context};
use anyhow::Result;
use ferias_cli::output::distance_badge;
use ferias_core::{Error, ErrorCode};
use ferias_geo::{classify_distance, distance_km, format_distance, Coordinate};
use serde::Serialize;

#[derive(Serialize)]
struct DistanceOutput {
    from: Coordinate,
    to: Coordinate,
    distance_km: f64,
    formatted: String,
    category: &'static str,
    style_tag: &'static str,
}

/// Run distance calculation
pub fn run(ctx: &Context, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<()> {
    let from = checked(lat1, lng1)?;
    let to = checked(lat2, lng2)?;

    let km = distance_km(&from, &to);
    let category = classify_distance(km);

    if ctx.is_json() {
        return print_json(&DistanceOutput {
            from,
            to,
            distance_km: km,
            formatted: format_distance(km),
            category: category.label(),
            style_tag: category.style_tag(),
        });
    }

    println!("{}", distance_badge(km));
    Ok(())
}

fn checked(lat: f64, lng: f64) -> Result<Coordinate> {
    let coordinate = Coordinate::new(lat, lng);
    if coordinate.is_valid() {
        Ok(coordinate)
    } else {
        Err(Error::new(ErrorCode::InvalidInput, format!("Coordinate out of range: {lat}, {lng}"))
            .with_suggestion("Latitude must be within ±90 and longitude within ±180")
            .into())
    }
}
