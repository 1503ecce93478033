use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use log::debug;
use stash_view_types::{
    ChartPoint, Observation, StashId, StashValueSnapshotSeries, ValidationError,
};

/// Validates the series and keeps the ones that belong on a chart: in the included set
/// (when there is one) and with at least one positive value.
pub(crate) fn chartable_series<'a>(
    series: &'a [StashValueSnapshotSeries],
    included_stash_ids: Option<&HashSet<&StashId>>,
) -> Result<Vec<&'a StashValueSnapshotSeries>, ValidationError> {
    let mut chartable = Vec::with_capacity(series.len());
    for s in series {
        if included_stash_ids.is_some_and(|ids| !ids.contains(&s.stash_id)) {
            continue;
        }
        s.validate()?;
        if s.has_positive_value() {
            chartable.push(s);
        }
    }
    Ok(chartable)
}

/// Sums the most recently known value of every stash at each instant any stash reported.
///
/// Points at or before `min_timestamp` are dropped from the result, but still count towards
/// the last known values, so the first surviving point carries every stash's older value.
pub fn aggregate_net_value(
    series: &[StashValueSnapshotSeries],
    included_stash_ids: Option<&HashSet<&StashId>>,
    min_timestamp: Option<DateTime<Utc>>,
) -> Result<Vec<ChartPoint>, ValidationError> {
    let chartable = chartable_series(series, included_stash_ids)?;
    let mut grouped: BTreeMap<DateTime<Utc>, Vec<Observation>> = BTreeMap::new();
    for observation in chartable.iter().flat_map(|s| s.observations()) {
        grouped
            .entry(observation.timestamp)
            .or_default()
            .push(observation);
    }

    let mut last_known: HashMap<&StashId, f64> = HashMap::with_capacity(chartable.len());
    let points: Vec<ChartPoint> = grouped
        .into_iter()
        .map(|(timestamp, observations)| {
            for observation in observations {
                last_known.insert(observation.stash_id, observation.value);
            }
            ChartPoint {
                timestamp,
                value: last_known.values().sum(),
            }
        })
        // the running values above have to see every group, so the cutoff only applies here
        .filter(|point| min_timestamp.map_or(true, |min| point.timestamp > min))
        .collect();
    debug!(
        "net value: {} of {} stashes charted into {} points",
        chartable.len(),
        series.len(),
        points.len()
    );
    Ok(points)
}
