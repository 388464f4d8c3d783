//! The set of markers the widget currently shows.

use epoch_core::{GeoPoint, MarkerHandle};

use crate::surface::ViewSurface;

/// Owns the map surface and the ordered list of markers placed on it.
///
/// Only markers added through the manager are tracked; [`Self::clear`]
/// never touches anything else the host put on the surface.
#[derive(Debug)]
pub struct MarkerManager<V> {
    surface: V,
    markers: Vec<MarkerHandle>,
}

impl<V: ViewSurface> MarkerManager<V> {
    pub const fn new(surface: V) -> Self {
        Self {
            surface,
            markers: Vec::new(),
        }
    }

    /// Remove every tracked marker from the surface. Safe on an empty set.
    pub fn clear(&mut self) {
        for handle in self.markers.drain(..) {
            self.surface.remove_marker(handle);
        }
    }

    /// Place a marker, bind its popup, optionally open it, and track it.
    pub fn add_marker(&mut self, point: GeoPoint, popup_html: &str, auto_open: bool) -> MarkerHandle {
        let handle = self.surface.add_marker(point, popup_html);
        if auto_open {
            self.surface.open_popup(handle);
        }
        self.markers.push(handle);
        handle
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Tracked handles in insertion order.
    #[must_use]
    pub fn handles(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub const fn surface(&self) -> &V {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }
}
