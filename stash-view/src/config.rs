use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use stash_view_types::{GraphKind, StashId, StashViewSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GraphArg {
    NetValue,
    TabValue,
}

impl From<GraphArg> for GraphKind {
    fn from(value: GraphArg) -> Self {
        match value {
            GraphArg::NetValue => GraphKind::NetValue,
            GraphArg::TabValue => GraphKind::TabValue,
        }
    }
}

/// Chart the value history of your stash tabs
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// JSON array of stash value snapshot series
    #[arg(short, long)]
    pub snapshots: PathBuf,

    /// JSON array of stash tabs, used to name the tab value lines
    #[arg(short, long)]
    pub tabs: Option<PathBuf>,

    /// Stash view settings JSON. Flags below override it.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub graph: Option<GraphArg>,

    /// Switch to the other graph than the one selected
    #[arg(long)]
    pub toggle_graph: bool,

    /// Only show the last N minutes
    #[arg(long)]
    pub last_mins: Option<u32>,

    /// Only chart these stash ids, may be repeated
    #[arg(long = "tab")]
    pub tab_ids: Vec<String>,

    #[arg(short, long, env = "STASH_VIEW_OUTPUT", default_value = "stash-value.svg")]
    pub output: PathBuf,

    #[arg(long, default_value_t = 960)]
    pub width: u32,

    #[arg(long, default_value_t = 540)]
    pub height: u32,

    /// Print the chart points as JSON instead of drawing them
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

impl Args {
    /// Defaults, then the settings file, then the command line.
    pub(crate) fn settings(&self) -> Result<StashViewSettings> {
        let settings = match &self.settings {
            Some(path) => read_json(path)?,
            None => StashViewSettings::default(),
        };
        Ok(self.apply_overrides(settings))
    }

    fn apply_overrides(&self, mut settings: StashViewSettings) -> StashViewSettings {
        if let Some(graph) = self.graph {
            settings.selected_graph = graph.into();
        }
        if self.toggle_graph {
            settings.selected_graph = settings.selected_graph.toggled();
        }
        if let Some(mins) = self.last_mins {
            settings.relative_timerseries_filter_mins = Some(mins);
        }
        if !self.tab_ids.is_empty() {
            settings.filter_checked_tabs = true;
            settings.checked_tab_ids = self
                .tab_ids
                .iter()
                .map(|id| StashId::from(id.as_str()))
                .collect();
        }
        settings
    }

    pub(crate) fn wants_png(&self) -> bool {
        self.output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use stash_view_types::{GraphKind, StashId, StashViewSettings};

    use super::Args;

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from([
            "stash-view",
            "--snapshots",
            "snapshots.json",
            "--graph",
            "tab-value",
            "--last-mins",
            "60",
            "--tab",
            "a",
            "--tab",
            "b",
        ]);
        let settings = args.apply_overrides(StashViewSettings {
            relative_timerseries_filter_mins: Some(10),
            ..Default::default()
        });
        assert_eq!(settings.selected_graph, GraphKind::TabValue);
        assert_eq!(settings.relative_timerseries_filter_mins, Some(60));
        assert!(settings.filter_checked_tabs);
        assert_eq!(
            settings.checked_tab_ids,
            vec![StashId::from("a"), StashId::from("b")]
        );
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::parse_from(["stash-view", "-s", "snapshots.json", "--toggle-graph"]);
        let base = StashViewSettings {
            relative_timerseries_filter_mins: Some(10),
            ..Default::default()
        };
        let settings = args.apply_overrides(base.clone());
        assert_eq!(settings.selected_graph, GraphKind::TabValue);
        assert_eq!(settings.relative_timerseries_filter_mins, Some(10));
        assert_eq!(settings.checked_tab_ids, base.checked_tab_ids);
    }

    #[test]
    fn test_output_format() {
        let args = Args::parse_from(["stash-view", "-s", "x.json", "-o", "chart.PNG"]);
        assert!(args.wants_png());
        let args = Args::parse_from(["stash-view", "-s", "x.json", "-o", "chart.svg"]);
        assert!(!args.wants_png());
    }
}
