//! ferias - Montevideo street markets from the terminal
//!
//! Lists markets by day and neighborhood, sorts them by distance from an
//! address or a position, and produces the site's sitemap and structured data.

use clap::{Args, Parser, Subcommand};
use ferias_cli::OutputFormat;
use ferias_core::error::exit_codes;
use ferias_core::ErrorCode;
use ferias_geocoding::GeocodeError;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use commands::{catalog, distance, geocode, list, show, sitemap, validate};
use context::Context;

/// Montevideo street markets: listings, distances and site output
#[derive(Parser)]
#[command(name = "ferias")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to ferias.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Market dataset JSON (overrides [dataset] path)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List markets, optionally filtered and sorted by distance
    List {
        /// Day key or Spanish name (monday, sábado, ...) or "all"
        #[arg(long, default_value = "all")]
        day: String,

        /// Neighborhood slug or "all"
        #[arg(long, default_value = "all")]
        barrio: String,

        #[command(flatten)]
        origin: OriginArgs,
    },

    /// Show one market with its schedule and related markets
    Show {
        /// Market slug, e.g. mercado-del-puerto
        slug: String,
    },

    /// Resolve an address to coordinates
    Geocode {
        /// Street address or place in Montevideo
        address: String,
    },

    /// Great-circle distance between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        /// Latitude of the first point
        lat1: f64,
        /// Longitude of the first point
        lng1: f64,
        /// Latitude of the second point
        lat2: f64,
        /// Longitude of the second point
        lng2: f64,
    },

    /// Markets per day of the week
    Days,

    /// Neighborhoods with markets
    Barrios,

    /// Check the dataset for errors
    Validate,

    /// Generate sitemap.xml
    Sitemap {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// lastmod date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Print schema.org JSON-LD for a market page
    Jsonld {
        /// Market slug
        slug: String,
    },
}

/// Where distances are measured from
#[derive(Args, Debug, Default)]
pub struct OriginArgs {
    /// Sort by distance from this address
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    near: Option<String>,

    /// Sort by distance from this latitude (with --lng)
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Sort by distance from this longitude (with --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ferias=debug,ferias_geocoding=debug,ferias_markets=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<ferias_core::Error>().map(|e| e.code) {
        Some(ErrorCode::ValidationError | ErrorCode::InvalidInput | ErrorCode::InvalidFormat) => {
            exit_codes::VALIDATION_ERROR
        }
        Some(
            ErrorCode::ConfigError
            | ErrorCode::ConfigNotFound
            | ErrorCode::ConfigParseError
            | ErrorCode::ConfigValidationError,
        ) => exit_codes::CONFIG_ERROR,
        Some(ErrorCode::MarketNotFound | ErrorCode::FileNotFound | ErrorCode::AddressNotFound) => {
            exit_codes::NOT_FOUND
        }
        _ => exit_codes::FAILURE,
    };
    u8::try_from(code).unwrap_or(1)
}

fn report(err: &anyhow::Error, format: OutputFormat, verbose: bool) {
    if format.is_json() {
        if let Some(report) = err.downcast_ref::<ferias_core::Error>().map(ferias_core::Error::to_report) {
            if let Ok(json) = serde_json::to_string(&report) {
                eprintln!("{json}");
                return;
            }
        }
    }

    eprintln!("{} {}", "Error:".red().bold(), err);
    if verbose {
        let detail = err
            .downcast_ref::<ferias_core::Error>()
            .and_then(|e| e.source.as_deref())
            .and_then(|source| source.downcast_ref::<GeocodeError>())
            .and_then(GeocodeError::detail);
        if let Some(detail) = detail {
            eprintln!("  {} {}", "Detail:".dimmed(), detail);
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match Context::new(&cli) {
        Ok(ctx) => match cli.command {
            Commands::List { day, barrio, origin } => list::run(&ctx, &day, &barrio, &origin).await,
            Commands::Show { slug } => show::run(&ctx, &slug),
            Commands::Geocode { address } => geocode::run(&ctx, &address).await,
            Commands::Distance { lat1, lng1, lat2, lng2 } => distance::run(&ctx, lat1, lng1, lat2, lng2),
            Commands::Days => catalog::days(&ctx),
            Commands::Barrios => catalog::barrios(&ctx),
            Commands::Validate => validate::run(&ctx),
            Commands::Sitemap { output, date } => sitemap::run(&ctx, output.as_deref(), date),
            Commands::Jsonld { slug } => show::json_ld(&ctx, &slug),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, cli.format, cli.verbose);
            ExitCode::from(exit_code(&e))
        }
    }
}
