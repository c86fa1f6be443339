//! Lookups over the dataset used by listing and detail pages

use crate::filter::{DayFilter, NeighborhoodFilter};
use crate::model::{neighborhood_label, Day, Market, MarketsData};
use serde::Serialize;
use std::collections::HashSet;

/// Maximum number of related markets suggested on a detail page
pub const RELATED_LIMIT: usize = 6;

/// A neighborhood that has at least one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    /// Filter value, e.g. `ciudad-vieja`
    pub slug: String,
    /// Display text, e.g. `ciudad vieja`
    pub label: String,
}

/// A market together with the day it was found under
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayMarket<'a> {
    /// Day key
    pub day: Day,
    /// The market
    #[serde(flatten)]
    pub market: &'a Market,
}

impl MarketsData {
    /// Whether any market operates on `day`
    #[must_use]
    pub fn has_markets_for_day(&self, day: Day) -> bool {
        !self.markets_for_day(day).is_empty()
    }

    /// Whether `day` has a market in `neighborhood`
    #[must_use]
    pub fn has_markets_in(&self, day: Day, neighborhood: &NeighborhoodFilter) -> bool {
        self.markets_for_day(day).iter().any(|m| neighborhood.matches(m))
    }

    /// Days with at least one market, Monday first
    #[must_use]
    pub fn days_with_markets(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| self.has_markets_for_day(*d)).collect()
    }

    /// Days with no markets, Monday first
    #[must_use]
    pub fn days_without_markets(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| !self.has_markets_for_day(*d)).collect()
    }

    /// Number of listings on `day`
    #[must_use]
    pub fn market_count_for_day(&self, day: Day) -> usize {
        self.markets_for_day(day).len()
    }

    /// Number of listings across all days; a market open twice counts twice
    #[must_use]
    pub fn total_market_count(&self) -> usize {
        self.iter().map(|(_, markets)| markets.len()).sum()
    }

    /// First listing with this id, scanning Monday first
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<DayMarket<'_>> {
        self.listings()
            .find(|(_, market)| market.id == slug)
            .map(|(day, market)| DayMarket { day, market })
    }

    /// Distinct market ids in first-seen order
    #[must_use]
    pub fn all_slugs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.listings()
            .map(|(_, market)| market.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Other markets in the same neighborhood or on the same day
    ///
    /// Each market appears at most once, under the first day it matched.
    #[must_use]
    pub fn related_markets(&self, current: &Market, current_day: Day) -> Vec<DayMarket<'_>> {
        let mut seen = HashSet::new();
        self.listings()
            .filter(|(day, market)| {
                market.id != current.id && (market.neighborhood == current.neighborhood || *day == current_day)
            })
            .filter(|(_, market)| seen.insert(market.id.as_str()))
            .take(RELATED_LIMIT)
            .map(|(day, market)| DayMarket { day, market })
            .collect()
    }

    /// Distinct neighborhoods in first-seen order
    #[must_use]
    pub fn neighborhoods(&self) -> Vec<Neighborhood> {
        let mut seen = HashSet::new();
        self.listings()
            .map(|(_, market)| market.neighborhood.as_str())
            .filter(|slug| seen.insert(*slug))
            .map(|slug| Neighborhood {
                slug: slug.to_string(),
                label: neighborhood_label(slug),
            })
            .collect()
    }

    /// Earliest day in the week with a market in `neighborhood`
    #[must_use]
    pub fn first_available_day(&self, neighborhood: &NeighborhoodFilter) -> Option<Day> {
        Day::ALL.into_iter().find(|d| self.has_markets_in(*d, neighborhood))
    }

    /// Day filter to use after switching to `neighborhood`
    ///
    /// Keeps `current` when it still has markets there (`all` always does),
    /// otherwise jumps to the first day that has; with no such day the
    /// selection is left alone and the list will be empty.
    #[must_use]
    pub fn day_for_neighborhood(&self, current: &DayFilter, neighborhood: &NeighborhoodFilter) -> DayFilter {
        let still_listed = match current {
            DayFilter::All => true,
            DayFilter::Day(day) => self.has_markets_in(*day, neighborhood),
            DayFilter::Unknown(_) => false,
        };

        if still_listed {
            return current.clone();
        }

        self.first_available_day(neighborhood)
            .map_or_else(|| current.clone(), DayFilter::Day)
    }
}
