use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point on a value chart. Serialized as `{"x": .., "y": ..}`,
/// the shape line chart libraries take directly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    #[serde(rename = "x")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "y")]
    pub value: f64,
}

impl From<ChartPoint> for (DateTime<Utc>, f64) {
    fn from(point: ChartPoint) -> Self {
        (point.timestamp, point.value)
    }
}

impl From<(DateTime<Utc>, f64)> for ChartPoint {
    fn from((timestamp, value): (DateTime<Utc>, f64)) -> Self {
        Self { timestamp, value }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LabeledSeries {
    pub label: String,
    #[serde(rename = "data")]
    pub points: Vec<ChartPoint>,
}
