use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

#[derive(Hash, Clone, Debug, Deserialize, Serialize, Eq, PartialEq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StashId(pub String);

impl Display for StashId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StashId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A stash tab as the player named it
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct StashTab {
    pub id: StashId,
    pub name: String,
}

/// Value history for one stash. `values[i]` was observed at `timestamps[i]`,
/// the pairs are not guaranteed to be in time order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StashValueSnapshotSeries {
    pub stash_id: StashId,
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

/// One recorded value of a stash, borrowed out of a [`StashValueSnapshotSeries`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation<'a> {
    pub stash_id: &'a StashId,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl StashValueSnapshotSeries {
    pub fn new(stash_id: impl Into<StashId>, points: &[(DateTime<Utc>, f64)]) -> Self {
        let (timestamps, values) = points.iter().copied().unzip();
        Self {
            stash_id: stash_id.into(),
            timestamps,
            values,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timestamps.len() != self.values.len() {
            return Err(ValidationError::LengthMismatch {
                stash_id: self.stash_id.clone(),
                timestamps: self.timestamps.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Stashes that have only ever been empty or worthless are left off every chart.
    pub fn has_positive_value(&self) -> bool {
        self.values.iter().any(|v| *v > 0.0)
    }

    pub fn observations(&self) -> impl Iterator<Item = Observation<'_>> {
        self.timestamps
            .iter()
            .zip(self.values.iter())
            .map(|(timestamp, value)| Observation {
                stash_id: &self.stash_id,
                timestamp: *timestamp,
                value: *value,
            })
    }
}
