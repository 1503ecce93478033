use std::{collections::HashSet, fmt::Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{time_window, StashId};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphKind {
    #[default]
    #[serde(rename = "net value")]
    NetValue,
    #[serde(rename = "tab value")]
    TabValue,
}

impl GraphKind {
    pub fn toggled(self) -> Self {
        match self {
            GraphKind::NetValue => GraphKind::TabValue,
            GraphKind::TabValue => GraphKind::NetValue,
        }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GraphKind::NetValue => "Net value",
            GraphKind::TabValue => "Tab value",
        })
    }
}

/// The chart related part of the stash view state
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StashViewSettings {
    pub selected_graph: GraphKind,
    /// How far back the charts reach, in minutes. `None` or `0` shows everything.
    pub relative_timerseries_filter_mins: Option<u32>,
    pub filter_checked_tabs: bool,
    pub checked_tab_ids: Vec<StashId>,
}

impl StashViewSettings {
    /// `None` means every stash is included.
    pub fn included_stash_ids(&self) -> Option<HashSet<&StashId>> {
        self.filter_checked_tabs
            .then(|| self.checked_tab_ids.iter().collect())
    }

    pub fn min_timestamp(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        time_window::min_timestamp(now, self.relative_timerseries_filter_mins)
    }
}
