//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use console::{pad_str, Alignment};
use ferias_geo::{classify_distance, format_distance, DistanceCategory};
use owo_colors::OwoColorize;
use std::borrow::Cow;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

impl OutputFormat {
    /// Whether machine-readable output was requested
    #[must_use]
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(console::measure_text_width(message)));
    }
}

/// `2.3 km · Cerca`, colored by proximity bucket
#[must_use]
pub fn distance_badge(km: f64) -> String {
    let category = classify_distance(km);
    let text = format!("{} · {}", format_distance(km), category.label());
    match category {
        DistanceCategory::VeryClose => text.green().to_string(),
        DistanceCategory::Close => text.yellow().to_string(),
        DistanceCategory::Moderate => text.bright_red().to_string(),
        DistanceCategory::Far => text.red().to_string(),
    }
}

/// Left-align `text` to `width` terminal columns, truncating with `…`
#[must_use]
pub fn pad(text: &str, width: usize) -> Cow<'_, str> {
    pad_str(text, width, Alignment::Left, Some("…"))
}

/// Format a count with singular/plural
#[must_use]
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "feria", "ferias"), "1 feria");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(0, "feria", "ferias"), "0 ferias");
        assert_eq!(format_count(21, "feria", "ferias"), "21 ferias");
    }

    #[test]
    fn test_distance_badge_text() {
        let badge = console::strip_ansi_codes(&distance_badge(0.5)).into_owned();
        assert_eq!(badge, "500 m · Muy cerca");

        let far = console::strip_ansi_codes(&distance_badge(12.4)).into_owned();
        assert_eq!(far, "12.4 km · Lejos");
    }

    #[test]
    fn test_pad_counts_columns_not_bytes() {
        assert_eq!(pad("Cordón", 8), "Cordón  ");
        assert_eq!(console::measure_text_width(&pad("Feria de Tristán Narvaja", 10)), 10);
    }

    #[test]
    fn test_output_format() {
        assert!(OutputFormat::Json.is_json());
        assert!(!OutputFormat::default().is_json());
    }
}
