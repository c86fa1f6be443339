//! Sitemap command - sitemap.xml for the public site

use crate::context::{print_json, Context};
use anyhow::{Context as _, Result};
use chrono::{NaiveDate, Utc};
use ferias_cli::output::format_count;
use ferias_cli::Status;
use ferias_markets::seo::{render_sitemap, sitemap_entries};
use std::path::Path;

/// Run sitemap generation
pub fn run(ctx: &Context, output: Option<&Path>, date: Option<NaiveDate>) -> Result<()> {
    let data = ctx.dataset()?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let entries = sitemap_entries(&data, ctx.site_url(), date);

    if ctx.is_json() && output.is_none() {
        return print_json(&entries);
    }

    let xml = render_sitemap(&entries).map_err(ferias_core::Error::from)?;

    match output {
        Some(path) => {
            std::fs::write(path, &xml).with_context(|| format!("Failed to write {}", path.display()))?;
            Status::success(&format!(
                "Wrote {} to {}",
                format_count(entries.len(), "URL", "URLs"),
                path.display()
            ));
        }
        None => print!("{xml}"),
    }

    Ok(())
}
