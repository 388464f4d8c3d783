//! Articles returned by the backend.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A historical article near a clicked point.
///
/// `title`, `extract`, `url`, `lat`, `lon` and `distance` are required; a
/// body missing any of them fails to deserialize. The remaining fields are
/// extras some backends return and default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub extract: String,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
    /// Distance from the clicked point, in meters.
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageid: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub years_mentioned: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl Article {
    /// Where the article's marker goes. Not the clicked point.
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}
