//! Show and jsonld commands - one market's detail page

use crate::context::{print_json, Context};
use anyhow::Result;
use ferias_cli::Status;
use ferias_markets::{seo, Day, DayMarket, MarketsData, MarketsError};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    market: DayMarket<'a>,
    days: Vec<Day>,
    related: Vec<DayMarket<'a>>,
}

fn find<'a>(data: &'a MarketsData, slug: &str) -> Result<DayMarket<'a>> {
    data.find_by_slug(slug)
        .ok_or_else(|| ferias_core::Error::from(MarketsError::NotFound(slug.to_string())).into())
}

fn days_open(data: &MarketsData, id: &str) -> Vec<Day> {
    data.iter()
        .filter(|(_, markets)| markets.iter().any(|m| m.id == id))
        .map(|(day, _)| day)
        .collect()
}

/// Run market detail
pub fn run(ctx: &Context, slug: &str) -> Result<()> {
    let data = ctx.dataset()?;
    let found = find(&data, slug)?;
    let market = found.market;
    let days = days_open(&data, &market.id);
    let related = data.related_markets(market, found.day);

    if ctx.is_json() {
        return print_json(&ShowOutput {
            market: found,
            days,
            related,
        });
    }

    Status::header(&market.name);
    println!("  {:<10} {}", "Dónde".dimmed(), market.location);
    println!("  {:<10} {}", "Barrio".dimmed(), market.neighborhood_label());
    let names: Vec<&str> = days.iter().map(|d| d.name()).collect();
    println!("  {:<10} {}", "Días".dimmed(), names.join(", "));
    println!("  {:<10} {}", "Horario".dimmed(), market.opening_hours());
    println!("  {:<10} {}, {}", "Ubicación".dimmed(), market.lat, market.lng);

    let links = [
        ("Instagram", &market.instagram_url),
        ("TripAdvisor", &market.trip_advisor_url),
        ("Google Maps", &market.google_maps_url),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            println!("  {:<10} {}", label.dimmed(), url);
        }
    }

    if !related.is_empty() {
        Status::header("Ferias relacionadas");
        for r in &related {
            println!("  {} ({}, {})", r.market.name, r.day.name(), r.market.neighborhood_label());
        }
    }

    Ok(())
}

/// Print LocalBusiness and BreadcrumbList JSON-LD for a market
pub fn json_ld(ctx: &Context, slug: &str) -> Result<()> {
    let data = ctx.dataset()?;
    let found = find(&data, slug)?;

    let documents = [
        seo::local_business(&data, found.market, ctx.site_url()),
        seo::breadcrumbs(found.market, ctx.site_url()),
    ];
    print_json(&documents)
}
