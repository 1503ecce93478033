use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::debug;
use stash_view_types::{
    ChartPoint, LabeledSeries, StashId, StashTab, StashValueSnapshotSeries, ValidationError,
};

use crate::net_value::chartable_series;

/// One line per stash, labeled with the tab name. Stashes without a known tab fall back
/// to their id as the label.
pub fn tab_value_series(
    series: &[StashValueSnapshotSeries],
    tabs: &[StashTab],
    included_stash_ids: Option<&HashSet<&StashId>>,
    min_timestamp: Option<DateTime<Utc>>,
) -> Result<Vec<LabeledSeries>, ValidationError> {
    let datasets: Vec<LabeledSeries> = chartable_series(series, included_stash_ids)?
        .into_iter()
        .map(|s| {
            let label = tabs
                .iter()
                .find(|tab| tab.id == s.stash_id)
                .map(|tab| tab.name.clone())
                .unwrap_or_else(|| s.stash_id.to_string());
            let mut points: Vec<ChartPoint> = s
                .observations()
                .filter(|o| min_timestamp.map_or(true, |min| o.timestamp > min))
                .map(|o| ChartPoint {
                    timestamp: o.timestamp,
                    value: o.value,
                })
                .collect();
            points.sort_by_key(|p| p.timestamp);
            LabeledSeries { label, points }
        })
        .collect();
    debug!("tab value: {} datasets", datasets.len());
    Ok(datasets)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use chrono::{DateTime, TimeZone, Utc};
    use stash_view_types::{StashId, StashTab, StashValueSnapshotSeries};

    use super::tab_value_series;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn tab(id: &str, name: &str) -> StashTab {
        StashTab {
            id: StashId::from(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_series_per_tab() {
        let input = [
            StashValueSnapshotSeries::new("a", &[(at(10), 2.0), (at(0), 1.0), (at(5), 3.0)]),
            StashValueSnapshotSeries::new("b", &[(at(1), 0.0)]),
            StashValueSnapshotSeries::new("c", &[(at(2), 9.0)]),
        ];
        let tabs = [tab("a", "Currency"), tab("b", "Dump")];
        let datasets = tab_value_series(&input, &tabs, None, None).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, "Currency");
        let a: Vec<_> = datasets[0]
            .points
            .iter()
            .map(|p| (p.timestamp.timestamp(), p.value))
            .collect();
        assert_eq!(a, vec![(0, 1.0), (5, 3.0), (10, 2.0)]);
        // no tab named "c"
        assert_eq!(datasets[1].label, "c");
    }

    #[test]
    fn test_cutoff_applies_per_point() {
        let input = [StashValueSnapshotSeries::new(
            "a",
            &[(at(0), 1.0), (at(5), 3.0), (at(10), 2.0)],
        )];
        let datasets = tab_value_series(&input, &[], None, Some(at(5))).unwrap();
        assert_eq!(datasets[0].points.len(), 1);
        assert_eq!(datasets[0].points[0].value, 2.0);
    }

    #[test]
    fn test_included_filter() {
        let input = [
            StashValueSnapshotSeries::new("a", &[(at(0), 1.0)]),
            StashValueSnapshotSeries::new("b", &[(at(0), 1.0)]),
        ];
        let b = StashId::from("b");
        let included: HashSet<&StashId> = [&b].into_iter().collect();
        let datasets = tab_value_series(&input, &[], Some(&included), None).unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].label, "b");
    }
}
