use thiserror::Error;

/// Failure reading from or writing to client-side storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage backend is reachable (private browsing, no `window`, ...).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the operation, e.g. quota exceeded.
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}
