//! Storage error taxonomy.
//!
//! These errors never reach game code: the JSON helpers in
//! [`crate::utils::persistence`] absorb them and fall back to defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium is disabled (private browsing, missing home dir).
    #[error("storage medium is unavailable")]
    Unavailable,
    /// Writing would push the medium past its byte quota.
    #[error("storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
