/// Errors from storage operations.
///
/// Drivers fail fast and return no partial data: a `get` or `put` is
/// all-or-nothing. Transient transport failures are absorbed by the pool's
/// retry loop before they surface here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unregistered scheme, unreadable local file, or failed remote read.
    #[error("not found: {0}")]
    NotFound(String),

    /// Failed local or remote write.
    #[error("write failed: {0}")]
    Write(String),

    /// Malformed listing response, malformed glob path, or non-text payload.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Invalid endpoint root or dispatcher configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
