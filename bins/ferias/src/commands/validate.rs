//! Validate command - dataset consistency report

use crate::context::{print_json, Context};
use anyhow::Result;
use ferias_cli::output::format_count;
use ferias_cli::Status;
use ferias_core::validation::ValidationResult;
use ferias_markets::validate::validate_dataset;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct ValidateOutput<'a> {
    valid: bool,
    markets: usize,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Run dataset validation
pub fn run(ctx: &Context) -> Result<()> {
    let data = ctx.dataset()?;
    let result = validate_dataset(&data);

    if ctx.is_json() {
        print_json(&ValidateOutput {
            valid: result.is_valid(),
            markets: data.all_slugs().len(),
            result: &result,
        })?;
    } else {
        for error in result.errors() {
            Status::error(&error.to_string());
        }
        for warning in result.warnings() {
            Status::warning(&warning.to_string());
        }

        if result.is_valid() {
            Status::success(&format!(
                "Dataset OK: {} in {}",
                format_count(data.all_slugs().len(), "market", "markets"),
                format_count(data.total_market_count(), "listing", "listings")
            ));
        } else {
            println!(
                "{}",
                format_count(result.errors().len(), "error", "errors").red()
            );
        }
    }

    result.to_result()?;
    Ok(())
}
