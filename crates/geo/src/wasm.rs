//! WASM bindings for the geo crate.
//!
//! These let the static site compute and label distances in the browser with
//! the same rounding and buckets as the CLI.

use crate::{classify_distance, distance_km, format_distance, nearest_first, Coordinate};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Rounded distance between two coordinates in kilometers.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    distance_km(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2))
}

/// Display string for a distance ("500 m", "2.3 km").
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance_js(km: f64) -> String {
    format_distance(km)
}

/// Spanish proximity label for a distance.
#[wasm_bindgen(js_name = distanceLabel)]
pub fn distance_label(km: f64) -> String {
    classify_distance(km).label().to_string()
}

/// Tailwind classes for a distance badge.
#[wasm_bindgen(js_name = distanceColor)]
pub fn distance_color(km: f64) -> String {
    classify_distance(km).css_classes().to_string()
}

#[derive(Serialize)]
struct SortedIndex {
    index: usize,
    distance: f64,
}

/// Sorts `[{"lat": .., "lng": ..}, ...]` by distance from the user.
///
/// Returns JSON `[{"index": i, "distance": km}, ...]`, nearest first, where
/// `index` points into the input array.
#[wasm_bindgen(js_name = sortByDistance)]
pub fn sort_by_distance_js(user_lat: f64, user_lng: f64, points_json: &str) -> Result<String, JsValue> {
    let points: Vec<Coordinate> = serde_json::from_str(points_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {e}")))?;

    let origin = Coordinate::new(user_lat, user_lng);
    let indexed: Vec<IndexedPoint> = points
        .into_iter()
        .enumerate()
        .map(|(index, at)| IndexedPoint { index, at })
        .collect();

    let sorted: Vec<SortedIndex> = nearest_first(&origin, indexed.iter())
        .into_iter()
        .map(|a| SortedIndex {
            index: a.item.index,
            distance: a.distance_km,
        })
        .collect();

    serde_json::to_string(&sorted).map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
}

struct IndexedPoint {
    index: usize,
    at: Coordinate,
}

impl crate::Located for IndexedPoint {
    fn coordinate(&self) -> Coordinate {
        self.at
    }
}
