mod draw;
mod net_value;
mod render;
mod tab_value;

pub use draw::{draw_value_line_chart, ChartError};
pub use net_value::aggregate_net_value;
pub use render::{render_png, render_svg};
pub use tab_value::tab_value_series;

use chrono::{DateTime, Utc};
use log::debug;
use stash_view_types::{
    GraphKind, LabeledSeries, StashTab, StashValueSnapshotSeries, StashViewSettings,
    ValidationError,
};

pub const NET_VALUE_LABEL: &str = "Net Value";

/// Builds the lines for whichever graph the settings have selected.
pub fn build_datasets(
    settings: &StashViewSettings,
    tabs: &[StashTab],
    series: &[StashValueSnapshotSeries],
    now: DateTime<Utc>,
) -> Result<Vec<LabeledSeries>, ValidationError> {
    let min_timestamp = settings.min_timestamp(now);
    let included = settings.included_stash_ids();
    debug!(
        "building {:?} from {} series, cutoff {min_timestamp:?}",
        settings.selected_graph,
        series.len()
    );
    match settings.selected_graph {
        GraphKind::NetValue => Ok(vec![LabeledSeries {
            label: NET_VALUE_LABEL.to_string(),
            points: aggregate_net_value(series, included.as_ref(), min_timestamp)?,
        }]),
        GraphKind::TabValue => tab_value_series(series, tabs, included.as_ref(), min_timestamp),
    }
}
