use std::collections::HashMap;
use std::sync::Arc;

use quay_http::Pool;

use crate::endpoint::Endpoint;
use crate::error::{StoreError, StoreResult};
use crate::fs::FsDriver;
use crate::http::HttpDriver;
use crate::s3::{AwsAuth, S3Driver};
use crate::traits::Driver;

/// Delimiter between the scheme token and the backend path.
const DELIMITER: &str = "://";

/// Default scheme for unqualified paths.
const DEFAULT_SCHEME: &str = "fs";

/// Scheme-based dispatcher over the registered storage drivers.
///
/// The registry is fixed at construction and read-only thereafter, so
/// concurrent callers dispatch without locking. All remote drivers share
/// one transport pool.
pub struct Arbiter {
    drivers: HashMap<String, Arc<dyn Driver>>,
}

impl Arbiter {
    /// Dispatcher serving `fs`, `http`, and `https` paths.
    pub fn new() -> StoreResult<Self> {
        Self::build(None)
    }

    /// Dispatcher that additionally serves `s3://` paths with the given
    /// credentials.
    pub fn with_auth(auth: AwsAuth) -> StoreResult<Self> {
        Self::build(Some(auth))
    }

    fn build(auth: Option<AwsAuth>) -> StoreResult<Self> {
        let pool = Pool::with_defaults().map_err(|e| StoreError::Config(e.to_string()))?;
        let pool = Arc::new(pool);

        let mut drivers: HashMap<String, Arc<dyn Driver>> = HashMap::new();
        drivers.insert("fs".to_string(), Arc::new(FsDriver::new()));
        drivers.insert(
            "http".to_string(),
            Arc::new(HttpDriver::new(Arc::clone(&pool))),
        );
        drivers.insert(
            "https".to_string(),
            Arc::new(HttpDriver::secure(Arc::clone(&pool))),
        );
        if let Some(auth) = auth {
            drivers.insert("s3".to_string(), Arc::new(S3Driver::new(pool, auth)));
        }

        Ok(Self { drivers })
    }

    pub fn get(&self, path: &str) -> StoreResult<String> {
        self.driver(path)?.get(strip_scheme(path))
    }

    pub fn get_bytes(&self, path: &str) -> StoreResult<Vec<u8>> {
        self.driver(path)?.get_bytes(strip_scheme(path))
    }

    pub fn put(&self, path: &str, data: &[u8]) -> StoreResult<()> {
        self.driver(path)?.put(strip_scheme(path), data)
    }

    pub fn put_text(&self, path: &str, data: &str) -> StoreResult<()> {
        self.driver(path)?.put_text(strip_scheme(path), data)
    }

    pub fn is_remote(&self, path: &str) -> StoreResult<bool> {
        Ok(self.driver(path)?.is_remote())
    }

    /// Expand a wildcard path, or return a literal path as-is.
    pub fn resolve(&self, path: &str, verbose: bool) -> StoreResult<Vec<String>> {
        self.driver(path)?.resolve(strip_scheme(path), verbose)
    }

    /// Scope the driver serving `root` to that root.
    pub fn endpoint(&self, root: &str) -> StoreResult<Endpoint> {
        Endpoint::new(Arc::clone(self.driver(root)?), strip_scheme(root))
    }

    fn driver(&self, path: &str) -> StoreResult<&Arc<dyn Driver>> {
        let scheme = parse_scheme(path);
        self.drivers.get(scheme).ok_or_else(|| {
            StoreError::NotFound(format!("no driver registered for scheme {scheme}"))
        })
    }
}

/// The scheme token before the first `://`, defaulting to `fs` when the
/// delimiter is absent.
pub fn parse_scheme(path: &str) -> &str {
    path.split_once(DELIMITER)
        .map(|(scheme, _)| scheme)
        .unwrap_or(DEFAULT_SCHEME)
}

/// Everything after the first `://`, or the whole path when unqualified.
pub fn strip_scheme(path: &str) -> &str {
    path.split_once(DELIMITER).map(|(_, rest)| rest).unwrap_or(path)
}
