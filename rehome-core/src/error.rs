//! Storage failure taxonomy
use thiserror::Error;

/// Failures raised by storage backends and the item codec.
///
/// None of these reach the grid: [`crate::store::PersistedItemStore`] logs them
/// and degrades to an empty listing or a skipped notification.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored items are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage write failed: {0}")]
    Write(String),
}
