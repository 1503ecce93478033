mod config;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use stash_view_charts::{build_datasets, render_png, render_svg};
use stash_view_types::{time_window, StashTab, StashValueSnapshotSeries};
use tracing::{error, info};

use crate::config::{read_json, Args};

fn run(args: Args) -> Result<()> {
    let settings = args.settings()?;
    let series: Vec<StashValueSnapshotSeries> = read_json(&args.snapshots)?;
    let tabs: Vec<StashTab> = match &args.tabs {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    info!(
        "loaded {} stash series and {} tabs",
        series.len(),
        tabs.len()
    );

    let window = time_window::filter_label(settings.relative_timerseries_filter_mins);
    let datasets = build_datasets(&settings, &tabs, &series, Utc::now())?;
    let points: usize = datasets.iter().map(|d| d.points.len()).sum();
    info!(
        "{} ({window}): {} lines, {points} points",
        settings.selected_graph,
        datasets.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }

    let caption = format!("{} - {window}", settings.selected_graph);
    let size = (args.width, args.height);
    if args.wants_png() {
        render_png(&args.output, &caption, &datasets, size)?;
    } else {
        let svg = render_svg(&caption, &datasets, size)?;
        std::fs::write(&args.output, svg)?;
    }
    info!("chart written to {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("stash view failed {e:?}");
        return Err(e);
    }
    Ok(())
}
