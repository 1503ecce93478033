//! Relative time windows for the value charts, e.g. "Last 3 hours".

use chrono::{DateTime, Duration, Utc};

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// The windows offered to the player, in minutes. `None` shows all history.
pub const RELATIVE_FILTER_PRESETS: [Option<u32>; 11] = [
    None,
    Some(10),
    Some(20),
    Some(30),
    Some(60),
    Some(60 * 3),
    Some(60 * 6),
    Some(60 * 12),
    Some(MINUTES_PER_DAY),
    Some(MINUTES_PER_DAY * 3),
    Some(MINUTES_PER_DAY * 7),
];

/// Spells out a minute count, leaving out zero parts: `1500` is "1 days 1 hours".
pub fn describe_minutes(minutes: u32) -> String {
    let days = minutes / MINUTES_PER_DAY;
    let hours = minutes % MINUTES_PER_DAY / MINUTES_PER_HOUR;
    let mins = minutes % MINUTES_PER_HOUR;
    [(days, "days"), (hours, "hours"), (mins, "mins")]
        .into_iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{amount} {unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn filter_label(window: Option<u32>) -> String {
    match window {
        None | Some(0) => "All".to_string(),
        Some(minutes) => format!("Last {}", describe_minutes(minutes)),
    }
}

/// Earliest instant a point may have and still be shown. Points at or before it are hidden.
pub fn min_timestamp(now: DateTime<Utc>, window: Option<u32>) -> Option<DateTime<Utc>> {
    match window {
        None | Some(0) => None,
        Some(minutes) => Some(now - Duration::minutes(minutes.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_minutes() {
        assert_eq!(describe_minutes(10), "10 mins");
        assert_eq!(describe_minutes(60), "1 hours");
        assert_eq!(describe_minutes(90), "1 hours 30 mins");
        assert_eq!(describe_minutes(60 * 24 * 7), "7 days");
        assert_eq!(describe_minutes(60 * 24 + 61), "1 days 1 hours 1 mins");
        assert_eq!(describe_minutes(0), "");
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = RELATIVE_FILTER_PRESETS
            .iter()
            .map(|w| filter_label(*w))
            .collect();
        assert_eq!(labels[0], "All");
        assert_eq!(labels[5], "Last 3 hours");
        assert_eq!(labels[10], "Last 7 days");
        assert_eq!(filter_label(Some(0)), "All");
    }

    #[test]
    fn test_min_timestamp() {
        let now = Utc::now();
        assert_eq!(min_timestamp(now, None), None);
        assert_eq!(min_timestamp(now, Some(0)), None);
        assert_eq!(
            min_timestamp(now, Some(60 * 24)),
            Some(now - Duration::days(1))
        );
    }
}
