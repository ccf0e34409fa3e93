use tracing::info;

use crate::error::{StoreError, StoreResult};

/// One storage medium satisfying the uniform read/write/glob contract.
///
/// Drivers receive backend-relative paths: the dispatcher strips the
/// scheme prefix before delegating, so `s3://bucket/key` arrives here as
/// `bucket/key`.
pub trait Driver: Send + Sync {
    /// The scheme identifier this driver serves.
    fn scheme(&self) -> &str;

    /// Whether operations leave the local machine.
    fn is_remote(&self) -> bool;

    /// Read an entire object. Failure returns no partial data.
    fn get_bytes(&self, path: &str) -> StoreResult<Vec<u8>>;

    /// Write an entire object, replacing any existing contents.
    fn put(&self, path: &str, data: &[u8]) -> StoreResult<()>;

    /// Enumerate the paths matching a wildcard path. Enumeration is
    /// backend-specific; no ordering is guaranteed.
    fn glob(&self, path: &str, verbose: bool) -> StoreResult<Vec<String>>;

    /// Read an object as text.
    fn get(&self, path: &str) -> StoreResult<String> {
        let data = self.get_bytes(path)?;
        String::from_utf8(data)
            .map_err(|_| StoreError::Protocol(format!("{path}: contents are not valid UTF-8")))
    }

    /// Write text.
    fn put_text(&self, path: &str, data: &str) -> StoreResult<()> {
        self.put(path, data.as_bytes())
    }

    /// Expand a wildcard path via [`Driver::glob`], or return any other
    /// path unchanged as a single-element sequence.
    fn resolve(&self, path: &str, verbose: bool) -> StoreResult<Vec<String>> {
        if is_glob_path(path) {
            if verbose {
                info!(scheme = self.scheme(), path, "resolving wildcard path");
            }
            let results = self.glob(path, verbose)?;
            if verbose {
                info!(count = results.len(), "resolved");
            }
            Ok(results)
        } else {
            Ok(vec![path.to_string()])
        }
    }
}

/// True when the path's last two characters are a path separator followed
/// by `*`. Anything else is a literal path.
pub(crate) fn is_glob_path(path: &str) -> bool {
    path.len() > 2 && (path.ends_with("/*") || path.ends_with("\\*"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubDriver;

    impl Driver for StubDriver {
        fn scheme(&self) -> &str {
            "stub"
        }

        fn is_remote(&self) -> bool {
            false
        }

        fn get_bytes(&self, path: &str) -> StoreResult<Vec<u8>> {
            match path {
                "text" => Ok(b"plain contents".to_vec()),
                "binary" => Ok(vec![0xFF, 0xFE, 0x00]),
                _ => Err(StoreError::NotFound(path.to_string())),
            }
        }

        fn put(&self, _path: &str, _data: &[u8]) -> StoreResult<()> {
            Ok(())
        }

        fn glob(&self, _path: &str, _verbose: bool) -> StoreResult<Vec<String>> {
            Ok(vec!["dir/one".to_string(), "dir/two".to_string()])
        }
    }

    #[test]
    fn resolve_returns_literal_path_unchanged() {
        let results = StubDriver.resolve("dir/object", false).unwrap();
        assert_eq!(results, vec!["dir/object".to_string()]);
    }

    #[test]
    fn resolve_delegates_wildcard_to_glob() {
        let results = StubDriver.resolve("dir/*", false).unwrap();
        assert_eq!(results, vec!["dir/one".to_string(), "dir/two".to_string()]);
    }

    #[test]
    fn resolve_handles_backslash_separator() {
        let results = StubDriver.resolve("dir\\*", false).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn bare_wildcard_is_literal() {
        // Two characters only: not a glob path.
        let results = StubDriver.resolve("/*", false).unwrap();
        assert_eq!(results, vec!["/*".to_string()]);
    }

    #[test]
    fn get_decodes_utf8() {
        assert_eq!(StubDriver.get("text").unwrap(), "plain contents");
    }

    #[test]
    fn get_rejects_non_utf8() {
        let err = StubDriver.get("binary").unwrap_err();
        assert!(matches!(err, StoreError::Protocol(_)));
    }
}
