use thiserror::Error;

use crate::StashId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Stash {stash_id} has {timestamps} timestamps but {values} values")]
    LengthMismatch {
        stash_id: StashId,
        timestamps: usize,
        values: usize,
    },
}
