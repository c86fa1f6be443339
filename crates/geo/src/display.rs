//! Presentation helpers for distances shown next to each market.

use serde::{Deserialize, Serialize};

/// Formats a distance in kilometers for display.
///
/// Below 1 km the value is shown as whole meters; otherwise the kilometer
/// value is printed as-is (it is already rounded by [`crate::distance_km`]).
///
/// ```
/// use ferias_geo::format_distance;
///
/// assert_eq!(format_distance(0.5), "500 m");
/// assert_eq!(format_distance(2.3), "2.3 km");
/// ```
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round())
    } else {
        format!("{km} km")
    }
}

/// Qualitative proximity bucket.
///
/// Boundaries are inclusive on the upper end: exactly 1 km is still
/// [`DistanceCategory::VeryClose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCategory {
    /// Up to 1 km
    VeryClose,
    /// Over 1 km, up to 3 km
    Close,
    /// Over 3 km, up to 5 km
    Moderate,
    /// Over 5 km
    Far,
}

impl DistanceCategory {
    /// Spanish label shown in the UI.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryClose => "Muy cerca",
            Self::Close => "Cerca",
            Self::Moderate => "Moderado",
            Self::Far => "Lejos",
        }
    }

    /// Color category consumed by the presentation layer.
    #[must_use]
    pub fn style_tag(&self) -> &'static str {
        match self {
            Self::VeryClose => "green",
            Self::Close => "yellow",
            Self::Moderate => "orange",
            Self::Far => "red",
        }
    }

    /// Tailwind classes used by the site's distance badges.
    #[must_use]
    pub fn css_classes(&self) -> &'static str {
        match self {
            Self::VeryClose => "text-green-600 bg-green-50",
            Self::Close => "text-yellow-600 bg-yellow-50",
            Self::Moderate => "text-orange-600 bg-orange-50",
            Self::Far => "text-red-600 bg-red-50",
        }
    }
}

impl std::fmt::Display for DistanceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a distance in kilometers to its proximity bucket.
///
/// ```
/// use ferias_geo::{classify_distance, DistanceCategory};
///
/// assert_eq!(classify_distance(1.0), DistanceCategory::VeryClose);
/// assert_eq!(classify_distance(5.01).label(), "Lejos");
/// ```
#[must_use]
pub fn classify_distance(km: f64) -> DistanceCategory {
    if km <= 1.0 {
        DistanceCategory::VeryClose
    } else if km <= 3.0 {
        DistanceCategory::Close
    } else if km <= 5.0 {
        DistanceCategory::Moderate
    } else {
        DistanceCategory::Far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_meters() {
        assert_eq!(format_distance(0.5), "500 m");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(0.999), "999 m");
        assert_eq!(format_distance(0.12), "120 m");
    }

    #[test]
    fn test_format_kilometers() {
        assert_eq!(format_distance(2.3), "2.3 km");
        assert_eq!(format_distance(1.0), "1 km");
        assert_eq!(format_distance(13.18), "13.18 km");
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_distance(1.0).label(), "Muy cerca");
        assert_eq!(classify_distance(1.01).label(), "Cerca");
        assert_eq!(classify_distance(3.0).label(), "Cerca");
        assert_eq!(classify_distance(3.01).label(), "Moderado");
        assert_eq!(classify_distance(5.0).label(), "Moderado");
        assert_eq!(classify_distance(5.01).label(), "Lejos");
    }

    #[test]
    fn test_style_tags() {
        assert_eq!(classify_distance(0.2).style_tag(), "green");
        assert_eq!(classify_distance(2.0).style_tag(), "yellow");
        assert_eq!(classify_distance(4.0).style_tag(), "orange");
        assert_eq!(classify_distance(40.0).style_tag(), "red");
        assert_eq!(DistanceCategory::Far.css_classes(), "text-red-600 bg-red-50");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&DistanceCategory::VeryClose).unwrap();
        assert_eq!(json, "\"very_close\"");
    }
}
