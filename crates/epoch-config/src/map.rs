//! Initial map view and tile layer.

use serde::{Deserialize, Serialize};

const fn default_center_lat() -> f64 {
    20.0
}

const fn default_zoom() -> u8 {
    3
}

fn default_tile_url() -> String {
    String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
}

const fn default_max_zoom() -> u8 {
    19
}

fn default_attribution() -> String {
    String::from("© OpenStreetMap contributors")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default)]
    pub center_lng: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,

    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: 0.0,
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            max_zoom: default_max_zoom(),
            attribution: default_attribution(),
        }
    }
}
