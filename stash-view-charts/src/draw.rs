use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;
use plotters::{
    prelude::*,
    style::{full_palette::PURPLE_A400, RGBColor},
};
use stash_view_types::LabeledSeries;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No points to draw")]
    NoPoints,
    #[error("{label} has a non-finite value {value} at {timestamp}")]
    NonFiniteValue {
        label: String,
        timestamp: DateTime<Utc>,
        value: f64,
    },
}

const LINE_COLORS: [RGBColor; 12] = [
    RGBColor(0x8d, 0xd3, 0xc7),
    RGBColor(0xff, 0xff, 0xb3),
    RGBColor(0xbe, 0xba, 0xda),
    RGBColor(0xfb, 0x80, 0x72),
    RGBColor(0x80, 0xb1, 0xd3),
    RGBColor(0xfd, 0xb4, 0x62),
    RGBColor(0xb3, 0xde, 0x69),
    RGBColor(0xfc, 0xcd, 0xe5),
    RGBColor(0xd9, 0xd9, 0xd9),
    RGBColor(0xbc, 0x80, 0xbd),
    RGBColor(0xcc, 0xeb, 0xc5),
    RGBColor(0xff, 0xed, 0x6f),
];

pub(crate) fn short_number(value: f64) -> String {
    match value.abs() {
        v if v >= 1_000_000.0 => format!("{:.2}mil", value / 1_000_000.0),
        v if v >= 1_000.0 => format!("{:.2}K", value / 1_000.0),
        _ => format!("{value:.0}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayLabelMode {
    Day,
    Hourly,
    Minute,
}

impl DayLabelMode {
    fn for_range(range: Duration) -> Self {
        if range.num_days() > 2 {
            DayLabelMode::Day
        } else if range.num_hours() > 5 {
            DayLabelMode::Hourly
        } else {
            DayLabelMode::Minute
        }
    }

    fn format(self, time: &DateTime<Utc>) -> String {
        match self {
            DayLabelMode::Day => format!("{}", time.format("%Y-%m-%d")),
            DayLabelMode::Hourly => format!("{}", time.format("%Y-%m-%d %H")),
            DayLabelMode::Minute => format!("{}", time.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Draws every non-empty dataset as a line over time.
pub fn draw_value_line_chart<'a, T>(
    backend: T,
    caption: &str,
    datasets: &[LabeledSeries],
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let datasets: Vec<_> = datasets.iter().filter(|d| !d.points.is_empty()).collect();
    // plotters never finishes laying out an axis that reaches infinity
    if let Some((dataset, point)) = datasets
        .iter()
        .flat_map(|d| d.points.iter().map(move |p| (d, p)))
        .find(|(_, p)| !p.value.is_finite())
    {
        return Err(ChartError::NonFiniteValue {
            label: dataset.label.clone(),
            timestamp: point.timestamp,
            value: point.value,
        }
        .into());
    }
    let (first, last) = datasets
        .iter()
        .flat_map(|d| &d.points)
        .map(|p| p.timestamp)
        .minmax()
        .into_option()
        .ok_or(ChartError::NoPoints)?;
    // a single instant has no width, give it an hour either side
    let (first, last) = if first == last {
        (first - Duration::hours(1), last + Duration::hours(1))
    } else {
        (first, last)
    };
    let (min_value, max_value) = datasets
        .iter()
        .flat_map(|d| &d.points)
        .map(|p| p.value)
        .fold((0.0f64, 0.0f64), |(min, max), v| (min.min(v), max.max(v)));
    let max_value = if max_value > min_value {
        max_value * 1.05
    } else {
        min_value + 1.0
    };
    let label = DayLabelMode::for_range(last.signed_duration_since(first));

    let root = backend.into_drawing_area();
    root.fill(&RGBColor(16, 10, 18).mix(0.93))?;
    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .margin(10)
        .caption(caption, ("sans-serif", 20.0).into_font().color(&WHITE))
        .build_cartesian_2d(first..last, min_value..max_value)?;

    chart
        .configure_mesh()
        .label_style(&WHITE)
        .bold_line_style(RGBColor(200, 200, 200).mix(0.2))
        .light_line_style(RGBColor(200, 200, 200).mix(0.02))
        .x_desc("Time")
        .y_desc("Value")
        .x_label_formatter(&move |x| label.format(x))
        .y_label_formatter(&|y| short_number(*y))
        .x_labels(5)
        .draw()?;

    for (dataset, color) in datasets.into_iter().zip(LINE_COLORS.iter().cycle()) {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                dataset.points.iter().map(|p| (p.timestamp, p.value)),
                color.stroke_width(2),
            ))?
            .label(dataset.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(PURPLE_A400)
        .label_font(&WHITE)
        .draw()?;

    // flush the backend here so a failed write is returned
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use chrono::Duration;

    use super::{short_number, DayLabelMode};

    #[test]
    fn test_short_number() {
        assert_eq!(short_number(999.0), "999");
        assert_eq!(short_number(1500.0), "1.50K");
        assert_eq!(short_number(4_500_000.0), "4.50mil");
        assert_eq!(short_number(-2000.0), "-2.00K");
    }

    #[test]
    fn test_label_mode() {
        assert_eq!(DayLabelMode::for_range(Duration::days(7)), DayLabelMode::Day);
        assert_eq!(
            DayLabelMode::for_range(Duration::hours(12)),
            DayLabelMode::Hourly
        );
        assert_eq!(
            DayLabelMode::for_range(Duration::minutes(30)),
            DayLabelMode::Minute
        );
    }
}
