//! Dataset consistency checks
//!
//! Day keys are already enforced when the dataset is parsed; these checks
//! cover the records themselves.

use crate::model::{Day, Market, MarketsData};
use ferias_core::validation::{ValidationError, ValidationResult, Validator};
use std::collections::HashMap;

/// Validate one market record
#[must_use]
pub fn validate_market(market: &Market) -> ValidationResult {
    Validator::new()
        .required("id", &market.id)
        .slug("id", &market.id)
        .required("name", &market.name)
        .required("location", &market.location)
        .slug("neighborhood", &market.neighborhood)
        .range("lat", market.lat, -90.0, 90.0)
        .range("lng", market.lng, -180.0, 180.0)
        .time_of_day("beginningTime", &market.beginning_time)
        .time_of_day("endTime", &market.end_time)
        .warn_if(
            "endTime",
            market.end_time <= market.beginning_time,
            "Closes at or before it opens",
        )
        .validate()
}

/// Validate every record plus cross-record rules
///
/// - A market listed on several days must carry the same data each time
/// - An id must not appear twice on the same day
/// - Days without markets produce a warning
#[must_use]
pub fn validate_dataset(data: &MarketsData) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_seen: HashMap<&str, (Day, &Market)> = HashMap::new();

    for (day, markets) in data.iter() {
        for (index, market) in markets.iter().enumerate() {
            let scope = format!("{}[{index}]", day.key());
            result.merge(validate_market(market).scoped(&scope));

            match first_seen.get(market.id.as_str()) {
                Some((seen_day, _)) if *seen_day == day => {
                    result.add_error(conflict(&scope, format!("Duplicate id '{}' on {}", market.id, day.key())));
                }
                Some((seen_day, original)) if *original != market => {
                    result.add_error(conflict(
                        &scope,
                        format!("Id '{}' differs from its listing on {}", market.id, seen_day.key()),
                    ));
                }
                Some(_) => {}
                None => {
                    first_seen.insert(market.id.as_str(), (day, market));
                }
            }
        }
    }

    for day in data.days_without_markets() {
        result.add_warning(ValidationError {
            field: day.key().to_string(),
            message: "No markets listed".to_string(),
            code: "EMPTY_DAY".to_string(),
            expected: None,
            actual: None,
        });
    }

    result
}

fn conflict(scope: &str, message: String) -> ValidationError {
    ValidationError {
        field: format!("{scope}.id"),
        message,
        code: "CONFLICT".to_string(),
        expected: None,
        actual: None,
    }
}
