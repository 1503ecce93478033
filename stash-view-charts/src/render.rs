use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::{BitMapBackend, SVGBackend};
use stash_view_types::LabeledSeries;

use crate::draw_value_line_chart;

pub fn render_svg(caption: &str, datasets: &[LabeledSeries], size: (u32, u32)) -> Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_value_line_chart(backend, caption, datasets)
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
    }
    Ok(buffer)
}

/// Renders straight to a png file at `path`.
pub fn render_png(
    path: &Path,
    caption: &str,
    datasets: &[LabeledSeries],
    size: (u32, u32),
) -> Result<()> {
    let backend = BitMapBackend::new(path, size);
    draw_value_line_chart(backend, caption, datasets)
        .map_err(|e| anyhow!("Failed to draw chart to {}: {}", path.display(), e))
}
