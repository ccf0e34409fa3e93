/// Errors from constructing HTTP transports.
///
/// Request execution itself never errors at this layer — every attempt
/// produces a [`crate::Response`], with transport-level failures mapped
/// to status 0 so the retry loop can absorb them.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Result alias for transport construction.
pub type HttpResult<T> = Result<T, HttpError>;
