//! Day/neighborhood filtering with optional nearest-first ordering
//!
//! [`filter_markets`] is a pure function of the dataset and a [`MarketFilter`]:
//!
//! 1. Select by day. `all` takes every day in order and keeps a market once per
//!    day it is listed under; an unknown day selects nothing.
//! 2. Keep only records whose neighborhood slug equals the filter exactly,
//!    unless the filter is `all`.
//! 3. With an origin, annotate each record with its distance and stable-sort
//!    ascending; without one, keep dataset order.

use crate::model::{Day, Market, MarketsData};
use ferias_geo::{nearest_first, Coordinate, Located};
use serde::Serialize;
use std::fmt;

/// Sentinel meaning "do not filter on this dimension"
pub const ALL: &str = "all";

/// Which day(s) to list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DayFilter {
    /// Every day
    #[default]
    All,
    /// One day
    Day(Day),
    /// A day key that matches nothing
    Unknown(String),
}

impl DayFilter {
    /// Parse a dataset day key or the literal `all`; anything else is unknown
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            return Self::All;
        }
        Day::from_key(value).map_or_else(|| Self::Unknown(value.to_string()), Self::Day)
    }

    /// Whether this filter admits `day`
    #[must_use]
    pub fn matches(&self, day: Day) -> bool {
        match self {
            Self::All => true,
            Self::Day(selected) => *selected == day,
            Self::Unknown(_) => false,
        }
    }
}

impl From<Day> for DayFilter {
    fn from(day: Day) -> Self {
        Self::Day(day)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Day(day) => f.write_str(day.key()),
            Self::Unknown(value) => f.write_str(value),
        }
    }
}

/// Which neighborhood to list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NeighborhoodFilter {
    /// Every neighborhood
    #[default]
    All,
    /// Exact slug match
    Slug(String),
}

impl NeighborhoodFilter {
    /// Parse user input; `all` is the only sentinel
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Slug(value.to_string())
        }
    }

    /// Whether this filter admits `market`
    #[must_use]
    pub fn matches(&self, market: &Market) -> bool {
        match self {
            Self::All => true,
            Self::Slug(slug) => market.neighborhood == *slug,
        }
    }
}

impl fmt::Display for NeighborhoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Everything [`filter_markets`] needs besides the dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketFilter {
    /// Day selection
    pub day: DayFilter,
    /// Neighborhood selection
    pub neighborhood: NeighborhoodFilter,
    /// Sort nearest-first from here, if set
    pub origin: Option<Coordinate>,
}

impl MarketFilter {
    /// No filtering, dataset order
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a day
    #[must_use]
    pub fn with_day(mut self, day: impl Into<DayFilter>) -> Self {
        self.day = day.into();
        self
    }

    /// Restrict to a neighborhood
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodFilter) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sort by distance from `origin`
    #[must_use]
    pub fn with_origin(mut self, origin: Coordinate) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// One row of the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketListing<'a> {
    /// Day this row was listed under
    pub day: Day,
    /// The market record
    #[serde(flatten)]
    pub market: &'a Market,
    /// Distance from the origin in km, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Located for MarketListing<'_> {
    fn coordinate(&self) -> Coordinate {
        self.market.coordinate()
    }
}

/// Filter and optionally sort the dataset; returns a fresh list every call
#[must_use]
pub fn filter_markets<'a>(data: &'a MarketsData, filter: &MarketFilter) -> Vec<MarketListing<'a>> {
    let selected = data
        .listings()
        .filter(|(day, _)| filter.day.matches(*day))
        .filter(|(_, market)| filter.neighborhood.matches(market))
        .map(|(day, market)| MarketListing {
            day,
            market,
            distance_km: None,
        });

    match filter.origin {
        None => selected.collect(),
        Some(origin) => nearest_first(&origin, selected)
            .into_iter()
            .map(|annotated| MarketListing {
                distance_km: Some(annotated.distance_km),
                ..annotated.item
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::market;
    use proptest::prelude::*;

    fn two_day_dataset() -> MarketsData {
        MarketsData::from_days([
            (
                Day::Monday,
                vec![
                    market("far", "carrasco", -34.8889, -56.0444),
                    market("near", "cordon", -34.9037, -56.1869),
                    market("mid", "pocitos", -34.9089, -56.1631),
                ],
            ),
            (
                Day::Tuesday,
                vec![
                    market("near", "cordon", -34.9037, -56.1869),
                    market("other", "buceo", -34.9097, -56.1319),
                ],
            ),
        ])
    }

    fn ids(listings: &[MarketListing<'_>]) -> Vec<String> {
        listings.iter().map(|l| l.market.id.clone()).collect()
    }

    #[test]
    fn test_single_day_keeps_order() {
        let data = two_day_dataset();
        let filter = MarketFilter::all().with_day(Day::Monday);

        let listed = filter_markets(&data, &filter);
        assert_eq!(ids(&listed), vec!["far", "near", "mid"]);
        assert!(listed.iter().all(|l| l.day == Day::Monday && l.distance_km.is_none()));
    }

    #[test]
    fn test_all_days_keeps_duplicates() {
        let data = two_day_dataset();
        let listed = filter_markets(&data, &MarketFilter::all());

        assert_eq!(ids(&listed), vec!["far", "near", "mid", "near", "other"]);
        assert_eq!(listed[3].day, Day::Tuesday);
    }

    #[test]
    fn test_unknown_day_is_empty() {
        let data = two_day_dataset();
        let filter = MarketFilter::all().with_day(DayFilter::parse("funday"));

        assert!(filter_markets(&data, &filter).is_empty());
    }

    #[test]
    fn test_day_key_must_match_exactly() {
        let data = two_day_dataset();
        for key in ["Monday", "MONDAY", "lunes", " monday ", "ALL", "All"] {
            let filter = MarketFilter::all().with_day(DayFilter::parse(key));
            assert!(filter_markets(&data, &filter).is_empty(), "{key:?} should select nothing");
        }
    }

    #[test]
    fn test_day_without_markets_is_empty() {
        let data = two_day_dataset();
        assert!(filter_markets(&data, &MarketFilter::all().with_day(Day::Sunday)).is_empty());
    }

    #[test]
    fn test_neighborhood_exact_match() {
        let data = two_day_dataset();

        let cordon = MarketFilter::all().with_neighborhood(NeighborhoodFilter::parse("cordon"));
        assert_eq!(ids(&filter_markets(&data, &cordon)), vec!["near", "near"]);

        let label = MarketFilter::all().with_neighborhood(NeighborhoodFilter::parse("Cordon"));
        assert!(filter_markets(&data, &label).is_empty());

        let unknown = MarketFilter::all().with_neighborhood(NeighborhoodFilter::parse("atlantida"));
        assert!(filter_markets(&data, &unknown).is_empty());
    }

    #[test]
    fn test_origin_sorts_nearest_first() {
        let data = two_day_dataset();
        let tristan_narvaja = Coordinate::new(-34.9011, -56.1881);
        let filter = MarketFilter::all().with_day(Day::Monday).with_origin(tristan_narvaja);

        let listed = filter_markets(&data, &filter);
        assert_eq!(ids(&listed), vec!["near", "mid", "far"]);
        assert_eq!(listed[0].distance_km, Some(0.31));
    }

    #[test]
    fn test_origin_ties_keep_dataset_order() {
        let data = two_day_dataset();
        let filter = MarketFilter::all().with_origin(Coordinate::new(-34.9037, -56.1869));

        let listed = filter_markets(&data, &filter);
        assert_eq!(ids(&listed)[..2], ["near", "near"]);
        assert_eq!(listed[0].day, Day::Monday);
        assert_eq!(listed[1].day, Day::Tuesday);
    }

    #[test]
    fn test_sentinel_parsing() {
        assert_eq!(DayFilter::parse("all"), DayFilter::All);
        assert_eq!(DayFilter::parse("friday"), DayFilter::Day(Day::Friday));
        assert_eq!(DayFilter::parse("viernes"), DayFilter::Unknown("viernes".into()));
        assert_eq!(DayFilter::parse("someday"), DayFilter::Unknown("someday".into()));
        assert_eq!(NeighborhoodFilter::parse("all"), NeighborhoodFilter::All);
        assert_eq!(DayFilter::Day(Day::Friday).to_string(), "friday");
    }

    #[test]
    fn test_listing_json() {
        let data = two_day_dataset();
        let filter = MarketFilter::all().with_day(Day::Tuesday).with_origin(Coordinate::new(-34.9, -56.18));
        let listed = filter_markets(&data, &filter);

        let json = serde_json::to_value(listed[0]).unwrap();
        assert_eq!(json["day"], "tuesday");
        assert_eq!(json["id"], "near");
        assert!(json["distance_km"].is_number());
    }

    proptest! {
        #[test]
        fn prop_sorted_and_deterministic(lat in -35.0f64..-34.7, lng in -56.4f64..-56.0) {
            let data = MarketsData::builtin().unwrap();
            let filter = MarketFilter::all().with_origin(Coordinate::new(lat, lng));

            let first = filter_markets(&data, &filter);
            let second = filter_markets(&data, &filter);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), data.listings().count());
            for pair in first.windows(2) {
                prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            }
        }
    }
}
