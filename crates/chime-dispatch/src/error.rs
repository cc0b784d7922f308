use thiserror::Error;

use chime_store::StoreError;

/// Errors that abort a dispatch cycle.
///
/// Per-reminder delivery and update failures are deliberately absent: they
/// are scoped to one reminder, logged, and never propagate.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// One of the three snapshot reads failed. Nothing was processed.
    #[error("Store fetch failed: {0}")]
    Fetch(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
