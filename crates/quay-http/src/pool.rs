use std::sync::{Condvar, Mutex};

use tracing::warn;

use crate::error::HttpResult;
use crate::response::Response;
use crate::transport::{Headers, Transport};

/// Default number of concurrently usable transport handles.
pub const DEFAULT_CAPACITY: usize = 32;

/// Default number of additional attempts after a retryable response.
pub const DEFAULT_RETRY: usize = 8;

/// Fixed-capacity set of reusable transport handles.
///
/// Admission control for all network traffic: at most `capacity` requests
/// are in flight at once. Callers block in [`Pool::acquire`] until a handle
/// is free; the returned guard gives exclusive use of one handle and puts
/// it back when dropped, waking one waiter.
///
/// Capacity and retry budget are fixed for the pool's lifetime.
pub struct Pool {
    transports: Vec<Transport>,
    available: Mutex<Vec<usize>>,
    released: Condvar,
    retry: usize,
}

impl Pool {
    /// Build a pool of `capacity` transports with `retry` extra attempts
    /// per request.
    pub fn new(capacity: usize, retry: usize) -> HttpResult<Self> {
        let transports = (0..capacity)
            .map(|_| Transport::new())
            .collect::<HttpResult<Vec<_>>>()?;
        Ok(Self {
            transports,
            available: Mutex::new((0..capacity).collect()),
            released: Condvar::new(),
            retry,
        })
    }

    pub fn with_defaults() -> HttpResult<Self> {
        Self::new(DEFAULT_CAPACITY, DEFAULT_RETRY)
    }

    pub fn capacity(&self) -> usize {
        self.transports.len()
    }

    pub fn retry(&self) -> usize {
        self.retry
    }

    /// Number of handles currently available.
    pub fn idle(&self) -> usize {
        self.available.lock().expect("pool mutex poisoned").len()
    }

    /// Block until a transport handle is free and lease it.
    ///
    /// Fairness is whatever the condition variable provides: some waiter
    /// proceeds on each release, in no guaranteed order.
    pub fn acquire(&self) -> PoolGuard<'_> {
        let mut available = self.available.lock().expect("pool mutex poisoned");
        while available.is_empty() {
            available = self.released.wait(available).expect("pool mutex poisoned");
        }
        let id = available.pop().expect("non-empty by loop condition");
        PoolGuard { pool: self, id }
    }

    fn release(&self, id: usize) {
        let mut available = self.available.lock().expect("pool mutex poisoned");
        available.push(id);
        drop(available);
        self.released.notify_one();
    }
}

/// Exclusive lease on one pooled transport handle.
///
/// Dropping the guard returns the handle to the pool exactly once, on
/// every exit path — including early returns and panics — so a failing
/// request never leaks pool capacity.
pub struct PoolGuard<'a> {
    pool: &'a Pool,
    id: usize,
}

impl PoolGuard<'_> {
    /// GET through the leased handle, retrying per the pool's budget.
    pub fn get(&self, url: &str, headers: &Headers) -> Response {
        let transport = &self.pool.transports[self.id];
        execute_with_retry(self.pool.retry, || transport.get(url, headers))
    }

    /// PUT through the leased handle, retrying per the pool's budget.
    pub fn put(&self, url: &str, body: &[u8], headers: &Headers) -> Response {
        let transport = &self.pool.transports[self.id];
        execute_with_retry(self.pool.retry, || transport.put(url, body, headers))
    }
}

impl Drop for PoolGuard<'_> {
    fn drop(&mut self) {
        self.pool.release(self.id);
    }
}

/// Run `attempt` until it returns a non-retryable response, up to `retry`
/// repeats after the first attempt. The last response is returned whether
/// or not it succeeded.
///
/// There is deliberately no inter-attempt delay: transient failures are
/// retried immediately.
pub fn execute_with_retry<F>(retry: usize, mut attempt: F) -> Response
where
    F: FnMut() -> Response,
{
    let mut response = attempt();
    let mut tries = 0;
    while response.should_retry() && tries < retry {
        tries += 1;
        warn!(
            status = response.status(),
            attempt = tries,
            budget = retry,
            "retrying request"
        );
        response = attempt();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn acquire_up_to_capacity_without_blocking() {
        let pool = Pool::new(3, 0).unwrap();
        let _a = pool.acquire();
        let _b = pool.acquire();
        let _c = pool.acquire();
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn acquire_beyond_capacity_blocks_until_release() {
        let pool = Pool::new(2, 0).unwrap();
        std::thread::scope(|s| {
            let first = pool.acquire();
            let _second = pool.acquire();

            let (tx, rx) = mpsc::channel();
            let pool_ref = &pool;
            s.spawn(move || {
                let _third = pool_ref.acquire();
                tx.send(()).unwrap();
            });

            // The third acquire must be parked while both handles are out.
            assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

            drop(first);
            assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        });
    }

    #[test]
    fn guard_release_is_exactly_once_on_failure_path() {
        fn failing_operation(pool: &Pool) -> Result<(), &'static str> {
            let _guard = pool.acquire();
            Err("request failed")
        }

        let pool = Pool::new(1, 0).unwrap();
        assert!(failing_operation(&pool).is_err());
        assert_eq!(pool.idle(), 1);

        // The handle must be usable again, and releasing it again must not
        // inflate the pool.
        drop(pool.acquire());
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn guard_releases_on_panic() {
        let pool = Pool::new(1, 0).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = pool.acquire();
            panic!("mid-request failure");
        }));
        assert!(result.is_err());
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn retry_succeeds_on_final_attempt() {
        let budget = 8;
        let attempts = Cell::new(0usize);
        let response = execute_with_retry(budget, || {
            attempts.set(attempts.get() + 1);
            if attempts.get() <= budget {
                Response::new(503, Vec::new())
            } else {
                Response::new(200, b"done".to_vec())
            }
        });
        assert_eq!(attempts.get(), budget + 1);
        assert!(response.ok());
        assert_eq!(response.body(), b"done");
    }

    #[test]
    fn retry_exhaustion_returns_last_response() {
        let budget = 8;
        let attempts = Cell::new(0usize);
        let response = execute_with_retry(budget, || {
            attempts.set(attempts.get() + 1);
            Response::new(503, Vec::new())
        });
        assert_eq!(attempts.get(), budget + 1);
        assert_eq!(response.status(), 503);
    }

    #[test]
    fn non_retryable_response_returns_immediately() {
        let attempts = Cell::new(0usize);
        let response = execute_with_retry(8, || {
            attempts.set(attempts.get() + 1);
            Response::new(404, Vec::new())
        });
        assert_eq!(attempts.get(), 1);
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn transport_failure_is_retried() {
        let attempts = Cell::new(0usize);
        let response = execute_with_retry(2, || {
            attempts.set(attempts.get() + 1);
            Response::transport_failure()
        });
        assert_eq!(attempts.get(), 3);
        assert_eq!(response.status(), 0);
    }
}
