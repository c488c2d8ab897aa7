//! Store error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Unified remote-call failure.
///
/// Transport errors and store-reported errors both land here; nothing
/// downstream has to branch on two failure channels.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (DNS, connect, request aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("store error ({0}): {1}")]
    Api(u16, String),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The client configuration is incomplete.
    #[error("config error: {0}")]
    Config(String),
}
