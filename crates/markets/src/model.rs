//! Market records, days of the week and the day-keyed dataset

use crate::error::{MarketsError, Result};
use ferias_geo::{Coordinate, Located};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const BUILTIN_DATASET: &str = include_str!("../data/markets.json");

/// Day of the week, ordered Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Lunes
    Monday,
    /// Martes
    Tuesday,
    /// Miércoles
    Wednesday,
    /// Jueves
    Thursday,
    /// Viernes
    Friday,
    /// Sábado
    Saturday,
    /// Domingo
    Sunday,
}

impl Day {
    /// Every day in canonical order
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Dataset key (`monday`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Exact dataset key lookup, no normalization
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Day::ALL.into_iter().find(|day| day.key() == key)
    }

    /// Spanish display name (`Lunes`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Day::Monday => "Lunes",
            Day::Tuesday => "Martes",
            Day::Wednesday => "Miércoles",
            Day::Thursday => "Jueves",
            Day::Friday => "Viernes",
            Day::Saturday => "Sábado",
            Day::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = MarketsError;

    /// Accepts dataset keys and Spanish names, with or without accents
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                wanted == day.key() || wanted == day.name().to_lowercase() || wanted == fold_accents(day.name())
            })
            .ok_or_else(|| MarketsError::UnknownDay(s.to_string()))
    }
}

fn fold_accents(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            _ => c,
        })
        .collect()
}

/// A street market as listed in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Unique slug, also used in page URLs
    pub id: String,
    /// Display name
    pub name: String,
    /// Street or corner description
    pub location: String,
    /// Neighborhood slug (`villa-biarritz`)
    pub neighborhood: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Opening time, `HH:MM`
    pub beginning_time: String,
    /// Closing time, `HH:MM`
    pub end_time: String,
    /// Photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Instagram profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    /// TripAdvisor page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_advisor_url: Option<String>,
    /// Direct Google Maps link
    #[serde(
        default,
        rename = "googleMapURL",
        alias = "googleMapsUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub google_maps_url: Option<String>,
}

impl Market {
    /// `08:00-14:00`
    #[must_use]
    pub fn opening_hours(&self) -> String {
        format!("{}-{}", self.beginning_time, self.end_time)
    }

    /// Neighborhood as display text
    #[must_use]
    pub fn neighborhood_label(&self) -> String {
        neighborhood_label(&self.neighborhood)
    }

    /// Links to the market elsewhere (Instagram, TripAdvisor), in that order
    pub fn same_as(&self) -> impl Iterator<Item = &str> {
        [&self.instagram_url, &self.trip_advisor_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
    }
}

impl Located for Market {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Turns a neighborhood slug into display text: `villa-biarritz` becomes `villa biarritz`
#[must_use]
pub fn neighborhood_label(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Markets keyed by the day they operate
///
/// A market open several days is listed once under each of them. Days absent
/// from the source simply have no markets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketsData {
    days: BTreeMap<Day, Vec<Market>>,
}

impl MarketsData {
    /// The dataset shipped with this crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Parse a dataset shaped like `{"monday": [Market, ...], ...}`
    ///
    /// Keys other than `monday`..`sunday` are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MarketsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&content)?;
        debug!(path = %path.display(), markets = data.total_market_count(), "Loaded dataset");
        Ok(data)
    }

    /// Build a dataset from day/market pairs; later entries for a day replace earlier ones
    pub fn from_days(days: impl IntoIterator<Item = (Day, Vec<Market>)>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Markets listed under `day`, in dataset order
    #[must_use]
    pub fn markets_for_day(&self, day: Day) -> &[Market] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days present in the dataset with their markets, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Market])> {
        self.days.iter().map(|(day, markets)| (*day, markets.as_slice()))
    }

    /// Every (day, market) listing, Monday first, duplicates across days kept
    pub fn listings(&self) -> impl Iterator<Item = (Day, &Market)> {
        self.iter()
            .flat_map(|(day, markets)| markets.iter().map(move |market| (day, market)))
    }

    /// Serialize back to the dataset's JSON shape
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
