//! # epoch-map
//!
//! Controller for the historical map widget.
//!
//! The host (a browser page, a test, the `epoch` CLI) supplies three
//! capabilities:
//! - a [`ViewSurface`] that places markers and popups on a map,
//! - [`FormFields`] holding the `startYear` / `endYear` labels,
//! - an [`epoch_client::ArticleSource`] answering article queries.
//!
//! [`MapWidget`] wires them together: a click clears the map, reads the year
//! labels, queries the source and renders one marker per article (or a single
//! "no events" marker). Field edits go through the [`RangeValidator`].

pub mod markers;
pub mod memory;
pub mod popup;
pub mod range;
pub mod surface;
pub mod widget;

pub use markers::MarkerManager;
pub use memory::{MemoryFields, PlacedMarker, RecordingSurface};
pub use range::{RangeCheck, RangeValidator};
pub use surface::{FormFields, MapView, TileLayer, ViewSurface, YearField};
pub use widget::{ClickOutcome, MapWidget};
