//! Capabilities the host environment provides to the widget.

use epoch_config::MapConfig;
use epoch_core::{GeoPoint, MarkerHandle};
use serde::{Deserialize, Serialize};

/// The two year inputs of the widget form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearField {
    Start,
    End,
}

impl YearField {
    /// DOM id of the input element backing this field.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Start => "startYear",
            Self::End => "endYear",
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Initial center and zoom of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl From<&MapConfig> for MapView {
    fn from(config: &MapConfig) -> Self {
        Self {
            center: GeoPoint::new(config.center_lat, config.center_lng),
            zoom: config.zoom,
        }
    }
}

/// Base tile layer added when the widget mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl From<&MapConfig> for TileLayer {
    fn from(config: &MapConfig) -> Self {
        Self {
            url_template: config.tile_url.clone(),
            max_zoom: config.max_zoom,
            attribution: config.attribution.clone(),
        }
    }
}

/// A map that can show markers with popups.
pub trait ViewSurface {
    /// Place a marker at `point` with `popup_html` bound but closed.
    fn add_marker(&mut self, point: GeoPoint, popup_html: &str) -> MarkerHandle;

    /// Remove a marker. Unknown handles are ignored.
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Open the popup bound to `handle`.
    fn open_popup(&mut self, handle: MarkerHandle);

    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    fn add_tile_layer(&mut self, layer: &TileLayer);
}

/// The year form: two label fields plus a way to tell the user something
/// went wrong.
pub trait FormFields {
    fn get(&self, field: YearField) -> String;

    fn set(&mut self, field: YearField, label: &str);

    /// Blocking user-visible message (a modal alert in a browser).
    fn alert(&mut self, message: &str);
}
