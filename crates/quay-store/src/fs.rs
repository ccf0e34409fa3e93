use std::fs;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::Driver;

/// Local filesystem driver.
///
/// A leading `~` (and no other tilde form) expands to the home directory.
/// The home value is injected at construction rather than read per call,
/// defaulting to `$HOME`.
pub struct FsDriver {
    home: Option<String>,
}

impl FsDriver {
    pub fn new() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
        }
    }

    /// Use a specific home directory for tilde expansion.
    pub fn with_home(home: impl Into<String>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    fn expand_tilde(&self, path: &str) -> String {
        match (path.strip_prefix('~'), &self.home) {
            (Some(rest), Some(home)) => format!("{home}{rest}"),
            _ => path.to_string(),
        }
    }
}

impl Default for FsDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for FsDriver {
    fn scheme(&self) -> &str {
        "fs"
    }

    fn is_remote(&self) -> bool {
        false
    }

    fn get_bytes(&self, path: &str) -> StoreResult<Vec<u8>> {
        let path = self.expand_tilde(path);
        fs::read(&path).map_err(|e| StoreError::NotFound(format!("could not read file {path}: {e}")))
    }

    fn put(&self, path: &str, data: &[u8]) -> StoreResult<()> {
        let path = self.expand_tilde(path);
        fs::write(&path, data)
            .map_err(|e| StoreError::Write(format!("could not write {path}: {e}")))
    }

    /// Shell-style wildcard enumeration. Returns regular files only, in
    /// no guaranteed order.
    fn glob(&self, path: &str, _verbose: bool) -> StoreResult<Vec<String>> {
        let pattern = self.expand_tilde(path);
        debug!(pattern, "filesystem glob");

        let entries = glob::glob(&pattern)
            .map_err(|e| StoreError::Protocol(format!("invalid glob pattern {pattern}: {e}")))?;

        let mut results = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| StoreError::NotFound(format!("could not stat while globbing: {e}")))?;
            if entry.is_file() {
                results.push(entry.to_string_lossy().into_owned());
            }
        }
        Ok(results)
    }
}
