//! Distance annotation and nearest-first ordering for collections.
//!
//! Anything that can report a [`Coordinate`] implements [`Located`]; the
//! functions here pair each item with its rounded distance from an origin and
//! sort stably, so ties keep their original relative order.

use crate::{distance_km, Coordinate};
use serde::Serialize;

/// Something with a position on the map.
pub trait Located {
    /// The item's coordinate.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

/// An item paired with its distance from an origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceAnnotation<T> {
    /// The annotated item
    pub item: T,
    /// Rounded distance from the origin in kilometers
    pub distance_km: f64,
}

/// Pairs every item with its distance from `origin`, preserving input order.
///
/// # Example
/// ```
/// use ferias_geo::{annotate_distances, Coordinate};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let points = [Coordinate::new(0.0, 1.0), Coordinate::new(0.0, 0.5)];
///
/// let annotated = annotate_distances(&origin, points.iter());
/// assert_eq!(annotated[0].distance_km, 111.19);
/// ```
pub fn annotate_distances<T, I>(origin: &Coordinate, items: I) -> Vec<DistanceAnnotation<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .map(|item| {
            let distance_km = distance_km(origin, &item.coordinate());
            DistanceAnnotation { item, distance_km }
        })
        .collect()
}

/// Stable, non-decreasing sort by distance.
///
/// NaN distances (from non-finite input coordinates) sort last.
pub fn sort_by_distance<T>(annotations: &mut [DistanceAnnotation<T>]) {
    annotations.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or_else(|| a.distance_km.is_nan().cmp(&b.distance_km.is_nan()))
    });
}

/// Annotates and sorts in one step, returning the nearest items first.
pub fn nearest_first<T, I>(origin: &Coordinate, items: I) -> Vec<DistanceAnnotation<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut annotated = annotate_distances(origin, items);
    sort_by_distance(&mut annotated);
    annotated
}
