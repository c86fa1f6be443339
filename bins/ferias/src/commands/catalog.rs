//! Days and barrios commands - dataset overview

use crate::context::{print_json, Context};
use anyhow::Result;
use ferias_cli::output::{format_count, pad};
use ferias_cli::Status;
use ferias_markets::{Day, NeighborhoodFilter};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct DaySummary {
    day: Day,
    name: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct BarrioSummary {
    slug: String,
    label: String,
    count: usize,
    first_day: Option<Day>,
}

/// Markets per day
pub fn days(ctx: &Context) -> Result<()> {
    let data = ctx.dataset()?;
    let summary: Vec<DaySummary> = Day::ALL
        .into_iter()
        .map(|day| DaySummary {
            day,
            name: day.name(),
            count: data.market_count_for_day(day),
        })
        .collect();

    if ctx.is_json() {
        return print_json(&summary);
    }

    Status::header("Ferias por día");
    for s in &summary {
        let count = format_count(s.count, "feria", "ferias");
        if s.count == 0 {
            println!("  {} {}", pad(s.name, 10), count.dimmed());
        } else {
            println!("  {} {}", pad(s.name, 10), count);
        }
    }
    println!();
    println!("{}", format_count(data.total_market_count(), "listado", "listados").dimmed());
    Ok(())
}

/// Neighborhoods with markets
pub fn barrios(ctx: &Context) -> Result<()> {
    let data = ctx.dataset()?;
    let summary: Vec<BarrioSummary> = data
        .neighborhoods()
        .into_iter()
        .map(|n| {
            let filter = NeighborhoodFilter::Slug(n.slug.clone());
            BarrioSummary {
                count: data.listings().filter(|(_, m)| filter.matches(m)).count(),
                first_day: data.first_available_day(&filter),
                slug: n.slug,
                label: n.label,
            }
        })
        .collect();

    if ctx.is_json() {
        return print_json(&summary);
    }

    Status::header("Barrios");
    for b in &summary {
        let first = b.first_day.map(Day::name).unwrap_or("-");
        println!(
            "  {} {} {}",
            pad(&b.slug, 16),
            pad(&format_count(b.count, "feria", "ferias"), 10),
            format!("desde el {first}").dimmed()
        );
    }
    Ok(())
}
