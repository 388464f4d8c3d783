//! Click-to-query-to-render controller.
//!
//! ```text
//! click ─▶ clear markers ─▶ read year labels ─▶ GET /api/articles ─▶ render
//!                                                     │
//!                                   (later click?) ───┴─▶ discard
//! ```
//!
//! Every click takes the next sequence number while holding the state lock.
//! When its response arrives the widget re-locks and renders only if that
//! number is still the latest, so an older response can never repaint a map
//! a newer click (or [`MapWidget::clear_map`]) already reset.

use std::sync::{Mutex, MutexGuard, PoisonError};

use epoch_client::{ArticleQuery, ArticleSource};
use epoch_config::EpochConfig;
use epoch_core::{GeoPoint, format_year, parse_year};
use serde::Serialize;

use crate::markers::MarkerManager;
use crate::popup::{article_popup, no_results_popup};
use crate::range::{RangeCheck, RangeValidator};
use crate::surface::{FormFields, MapView, TileLayer, ViewSurface, YearField};

/// How a single click ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Backend had nothing; one "no events" marker at the click point.
    NoResults,
    /// One marker per article.
    Rendered { markers: usize },
    /// Request or decoding failed. Logged, nothing drawn.
    Failed,
    /// A newer click or a clear arrived first; the response was dropped.
    Superseded,
    /// A year field did not parse. The user was alerted, nothing was sent.
    InvalidYear,
}

struct WidgetState<V, F> {
    markers: MarkerManager<V>,
    fields: F,
    latest_click: u64,
}

/// The map widget: one instance per mounted map.
pub struct MapWidget<V, F, S> {
    state: Mutex<WidgetState<V, F>>,
    source: S,
    validator: RangeValidator,
    view: MapView,
    tile_layer: TileLayer,
}

impl<V, F, S> MapWidget<V, F, S>
where
    V: ViewSurface,
    F: FormFields,
    S: ArticleSource,
{
    pub fn new(surface: V, fields: F, source: S, config: &EpochConfig) -> Self {
        Self {
            state: Mutex::new(WidgetState {
                markers: MarkerManager::new(surface),
                fields,
                latest_click: 0,
            }),
            source,
            validator: RangeValidator::from(&config.years),
            view: MapView::from(&config.map),
            tile_layer: TileLayer::from(&config.map),
        }
    }

    /// Center the map and add the base tile layer.
    pub fn mount(&self) {
        let mut state = self.lock();
        let surface = state.markers.surface_mut();
        surface.set_view(self.view.center, self.view.zoom);
        surface.add_tile_layer(&self.tile_layer);
    }

    /// Run the full click flow for `point`.
    ///
    /// Failures never escape: they are logged and reported as
    /// [`ClickOutcome::Failed`].
    pub async fn handle_click(&self, point: GeoPoint) -> ClickOutcome {
        tracing::debug!(lat = point.lat, lng = point.lng, "map click");

        let (ticket, query) = {
            let mut state = self.lock();
            state.markers.clear();
            state.latest_click += 1;

            let start_label = state.fields.get(YearField::Start);
            let end_label = state.fields.get(YearField::End);
            if let Err(err) = parse_year(&start_label).and_then(|_| parse_year(&end_label)) {
                tracing::warn!(%err, "click ignored: unreadable year field");
                state.fields.alert(&err.to_string());
                return ClickOutcome::InvalidYear;
            }

            (
                state.latest_click,
                ArticleQuery::new(point, start_label, end_label),
            )
        };

        let result = self.source.fetch(&query).await;

        let mut state = self.lock();
        if state.latest_click != ticket {
            tracing::debug!(
                ticket,
                latest = state.latest_click,
                "discarding response for superseded click"
            );
            return ClickOutcome::Superseded;
        }

        match result {
            Err(err) => {
                tracing::error!(error = %err, status = ?err.status(), "article lookup failed");
                ClickOutcome::Failed
            }
            Ok(articles) if articles.is_empty() => {
                state.markers.add_marker(point, &no_results_popup(point), true);
                ClickOutcome::NoResults
            }
            Ok(articles) => {
                for (index, article) in articles.iter().enumerate() {
                    state
                        .markers
                        .add_marker(article.position(), &article_popup(article), index == 0);
                }
                ClickOutcome::Rendered {
                    markers: articles.len(),
                }
            }
        }
    }

    /// Remove all markers and drop any response still in flight.
    pub fn clear_map(&self) {
        let mut state = self.lock();
        state.markers.clear();
        state.latest_click += 1;
    }

    /// Field-change event on one of the year inputs.
    pub fn on_year_change(&self, field: YearField) -> RangeCheck {
        let mut state = self.lock();
        self.validator.on_change(&mut state.fields, field)
    }

    /// A user edit: write `label` into `field`, then fire its change event.
    pub fn edit_year(&self, field: YearField, label: &str) -> RangeCheck {
        let mut state = self.lock();
        state.fields.set(field, label);
        self.validator.on_change(&mut state.fields, field)
    }

    /// Fill both year fields from signed years.
    pub fn set_time_period(&self, start: i64, end: i64) {
        let mut state = self.lock();
        state.fields.set(YearField::Start, &format_year(start));
        state.fields.set(YearField::End, &format_year(end));
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Inspect the surface and form without releasing ownership.
    pub fn inspect<R>(&self, f: impl FnOnce(&MarkerManager<V>, &F) -> R) -> R {
        let state = self.lock();
        f(&state.markers, &state.fields)
    }

    /// Tear the widget down, handing back the surface and form.
    pub fn into_parts(self) -> (V, F) {
        let state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        (state.markers.into_surface(), state.fields)
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState<V, F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
