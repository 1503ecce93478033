mod chart_point;
mod settings;
mod stash;

pub mod time_window;
pub mod validation;

pub use chart_point::{ChartPoint, LabeledSeries};
pub use settings::{GraphKind, StashViewSettings};
pub use stash::{Observation, StashId, StashTab, StashValueSnapshotSeries};
pub use validation::ValidationError;
