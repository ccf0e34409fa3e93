//! Bounded HTTP transport pool with blocking admission and retry.
//!
//! All remote storage traffic flows through a [`Pool`] of reusable
//! transport handles. The pool is the sole concurrency primitive in the
//! storage layer:
//!
//! 1. At most `capacity` requests are in flight at once; further callers
//!    block in [`Pool::acquire`] until a handle is released.
//! 2. A [`PoolGuard`] holds exclusive use of one handle and returns it
//!    exactly once when dropped, on every exit path.
//! 3. Transient failures (status 0 or 5xx) are retried immediately up to
//!    the pool's fixed budget, transparently to the caller.
//!
//! Operations are synchronous: a request runs until it completes, fails
//! terminally, or exhausts its retry budget. There is no cancellation.

pub mod error;
pub mod pool;
pub mod response;
pub mod transport;

pub use error::{HttpError, HttpResult};
pub use pool::{execute_with_retry, Pool, PoolGuard, DEFAULT_CAPACITY, DEFAULT_RETRY};
pub use response::Response;
pub use transport::{Headers, Transport};
