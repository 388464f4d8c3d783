//! In-memory surface and form used by the headless CLI and by tests.

use epoch_core::{GeoPoint, MarkerHandle};
use serde::Serialize;

use crate::surface::{FormFields, TileLayer, ViewSurface, YearField};

/// A marker currently placed on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMarker {
    pub handle: MarkerHandle,
    pub point: GeoPoint,
    pub popup_html: String,
    pub open: bool,
}

/// A [`ViewSurface`] that keeps everything it is asked to draw.
///
/// Like a browser map, opening one popup closes whichever was open before.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    markers: Vec<PlacedMarker>,
    removed: usize,
    view: Option<(GeoPoint, u8)>,
    tile_layers: Vec<TileLayer>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in placement order.
    #[must_use]
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn open_markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.markers.iter().filter(|m| m.open)
    }

    /// How many markers have been taken off the map so far.
    #[must_use]
    pub const fn removed_count(&self) -> usize {
        self.removed
    }

    #[must_use]
    pub const fn view(&self) -> Option<(GeoPoint, u8)> {
        self.view
    }

    #[must_use]
    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }
}

impl ViewSurface for RecordingSurface {
    fn add_marker(&mut self, point: GeoPoint, popup_html: &str) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.push(PlacedMarker {
            handle,
            point,
            popup_html: popup_html.to_string(),
            open: false,
        });
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        let before = self.markers.len();
        self.markers.retain(|m| m.handle != handle);
        self.removed += before - self.markers.len();
    }

    fn open_popup(&mut self, handle: MarkerHandle) {
        for marker in &mut self.markers {
            marker.open = marker.handle == handle;
        }
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }
}

/// [`FormFields`] held in memory; alerts are collected instead of shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFields {
    start: String,
    end: String,
    alerts: Vec<String>,
}

impl MemoryFields {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl FormFields for MemoryFields {
    fn get(&self, field: YearField) -> String {
        match field {
            YearField::Start => self.start.clone(),
            YearField::End => self.end.clone(),
        }
    }

    fn set(&mut self, field: YearField, label: &str) {
        let slot = match field {
            YearField::Start => &mut self.start,
            YearField::End => &mut self.end,
        };
        label.clone_into(slot);
    }

    fn alert(&mut self, message: &str) {
        tracing::debug!(message, "alert");
        self.alerts.push(message.to_string());
    }
}
