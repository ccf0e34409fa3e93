use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::traits::Driver;

/// A driver scoped to a fixed root path.
///
/// The root always ends with a separator. Subpaths are appended literally:
/// no `..`/`.` normalization and no separator deduplication.
#[derive(Clone)]
pub struct Endpoint {
    driver: Arc<dyn Driver>,
    root: String,
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("scheme", &self.driver.scheme())
            .field("root", &self.root)
            .finish()
    }
}

impl Endpoint {
    /// Scope `driver` to `root`. An empty root is a configuration error;
    /// a missing trailing separator is appended (already-terminated roots
    /// are unchanged).
    pub fn new(driver: Arc<dyn Driver>, root: &str) -> StoreResult<Self> {
        if root.is_empty() {
            return Err(StoreError::Config("endpoint root must not be empty".to_string()));
        }
        let mut root = root.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        Ok(Self { driver, root })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn scheme(&self) -> &str {
        self.driver.scheme()
    }

    pub fn is_remote(&self) -> bool {
        self.driver.is_remote()
    }

    pub fn get_subpath(&self, subpath: &str) -> StoreResult<String> {
        self.driver.get(&self.full_path(subpath))
    }

    pub fn get_subpath_bytes(&self, subpath: &str) -> StoreResult<Vec<u8>> {
        self.driver.get_bytes(&self.full_path(subpath))
    }

    pub fn put_subpath(&self, subpath: &str, data: &[u8]) -> StoreResult<()> {
        self.driver.put(&self.full_path(subpath), data)
    }

    pub fn put_subpath_text(&self, subpath: &str, data: &str) -> StoreResult<()> {
        self.driver.put_text(&self.full_path(subpath), data)
    }

    fn full_path(&self, subpath: &str) -> String {
        format!("{}{}", self.root, subpath)
    }
}
