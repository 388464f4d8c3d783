use anyhow::Context;
use epoch_client::ArticleClient;
use epoch_config::EpochConfig;
use epoch_core::GeoPoint;
use epoch_map::{
    ClickOutcome, FormFields, MapWidget, MemoryFields, PlacedMarker, RangeCheck, RecordingSurface,
    YearField,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClickArgs;

#[derive(Debug, Serialize)]
struct ClickResponse {
    #[serde(flatten)]
    outcome: ClickOutcome,
    point: GeoPoint,
    start_year: String,
    end_year: String,
    markers: Vec<PlacedMarker>,
    alerts: Vec<String>,
}

/// Handle `epoch click`.
///
/// Labels given on the command line go through the same field-change check a
/// user edit would, so an out-of-order pair is reset before the query runs.
pub async fn handle(
    args: &ClickArgs,
    config: &EpochConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ArticleClient::new(&config.api).context("failed to build article client")?;
    tracing::debug!(endpoint = client.endpoint(), "article client ready");

    let fields = MemoryFields::new(
        config.years.default_start.as_str(),
        config.years.default_end.as_str(),
    );
    let widget = MapWidget::new(RecordingSurface::new(), fields, client, config);
    widget.mount();

    for (field, label) in [(YearField::Start, &args.start), (YearField::End, &args.end)] {
        let Some(label) = label else { continue };
        let check = widget.edit_year(field, label);
        if check != RangeCheck::Accepted {
            tracing::warn!(field = field.element_id(), ?check, "year field reset");
        }
    }

    let point = GeoPoint::new(args.lat, args.lng);
    let outcome = widget.handle_click(point).await;

    let (surface, fields) = widget.into_parts();
    let response = ClickResponse {
        outcome,
        point,
        start_year: fields.get(YearField::Start),
        end_year: fields.get(YearField::End),
        markers: surface.markers().to_vec(),
        alerts: fields.alerts().to_vec(),
    };
    crate::output::output(&response, flags.format)
}
