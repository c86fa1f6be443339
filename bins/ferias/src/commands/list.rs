//! List command - filtered, optionally distance-sorted markets

use super::geocode::resolve_origin;
use crate::context::{print_json, Context};
use crate::OriginArgs;
use anyhow::Result;
use ferias_cli::output::{distance_badge, format_count, pad};
use ferias_cli::Status;
use ferias_geocoding::GeocodeResult;
use ferias_markets::{filter_markets, Day, DayFilter, MarketFilter, MarketListing, NeighborhoodFilter, ALL};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct ListOutput<'a> {
    day: String,
    barrio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<&'a GeocodeResult>,
    count: usize,
    markets: &'a [MarketListing<'a>],
}

/// Accept `ALL`, Spanish names and stray spaces on the command line
fn day_filter(input: &str) -> DayFilter {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(ALL) {
        return DayFilter::All;
    }
    trimmed
        .parse::<Day>()
        .map_or_else(|_| DayFilter::parse(trimmed), DayFilter::Day)
}

/// Run market listing
pub async fn run(ctx: &Context, day: &str, barrio: &str, origin: &OriginArgs) -> Result<()> {
    let data = ctx.dataset()?;
    let origin = resolve_origin(ctx, origin).await?;

    let filter = MarketFilter {
        day: day_filter(day),
        neighborhood: NeighborhoodFilter::parse(barrio),
        origin: origin.as_ref().map(|o| o.coordinate),
    };

    if let DayFilter::Unknown(value) = &filter.day {
        Status::warning(&format!("Unknown day '{value}', nothing to list"));
    }

    let listings = filter_markets(&data, &filter);

    if ctx.is_json() {
        return print_json(&ListOutput {
            day: filter.day.to_string(),
            barrio: filter.neighborhood.to_string(),
            origin: origin.as_ref(),
            count: listings.len(),
            markets: &listings,
        });
    }

    let mut title = format!("Ferias · {}", describe_day(&filter.day));
    if let NeighborhoodFilter::Slug(slug) = &filter.neighborhood {
        title.push_str(&format!(" · {}", ferias_markets::neighborhood_label(slug)));
    }
    Status::header(&title);

    if let Some(origin) = &origin {
        println!("{} {} ({})", "Desde".dimmed(), origin.display_address, origin.coordinate);
    }

    if listings.is_empty() {
        Status::info("No hay ferias para estos filtros");
        let suggestion = data.day_for_neighborhood(&filter.day, &filter.neighborhood);
        if suggestion != filter.day {
            if let DayFilter::Day(day) = suggestion {
                Status::info(&format!("Probá con --day {}", day.key()));
            }
        }
        return Ok(());
    }

    for listing in &listings {
        let market = listing.market;
        let distance = listing.distance_km.map(distance_badge).unwrap_or_default();
        println!(
            "  {} {} {} {} {}",
            pad(&market.name, 26).bold(),
            pad(listing.day.name(), 10),
            market.opening_hours().dimmed(),
            pad(&market.neighborhood_label(), 15),
            distance
        );
    }

    println!();
    println!("{}", format_count(listings.len(), "feria", "ferias").dimmed());
    Ok(())
}

fn describe_day(day: &DayFilter) -> String {
    match day {
        DayFilter::All => "todos los días".to_string(),
        DayFilter::Day(day) => day.name().to_string(),
        DayFilter::Unknown(value) => value.clone(),
    }
}
