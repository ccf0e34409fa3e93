use std::sync::Arc;

use quay_http::Pool;

use crate::error::{StoreError, StoreResult};
use crate::traits::Driver;

/// Generic HTTP driver: a thin adapter from the driver contract onto the
/// transport pool.
///
/// The dispatcher strips the scheme before delegating, so the driver
/// keeps its own scheme and re-prefixes it to form an absolute URL.
pub struct HttpDriver {
    pool: Arc<Pool>,
    scheme: &'static str,
}

impl HttpDriver {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            scheme: "http",
        }
    }

    /// Driver registered for `https://` paths; same pool, TLS URLs.
    pub fn secure(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            scheme: "https",
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}://{}", self.scheme, path)
    }
}

impl Driver for HttpDriver {
    fn scheme(&self) -> &str {
        self.scheme
    }

    fn is_remote(&self) -> bool {
        true
    }

    fn get_bytes(&self, path: &str) -> StoreResult<Vec<u8>> {
        let url = self.url(path);
        let response = self.pool.acquire().get(&url, &Vec::new());
        if response.ok() {
            Ok(response.into_body())
        } else {
            Err(StoreError::NotFound(format!(
                "couldn't HTTP GET {url} (status {})",
                response.status()
            )))
        }
    }

    fn put(&self, path: &str, data: &[u8]) -> StoreResult<()> {
        let url = self.url(path);
        let response = self.pool.acquire().put(&url, data, &Vec::new());
        if response.ok() {
            Ok(())
        } else {
            Err(StoreError::Write(format!(
                "couldn't HTTP PUT to {url} (status {})",
                response.status()
            )))
        }
    }

    fn glob(&self, path: &str, _verbose: bool) -> StoreResult<Vec<String>> {
        Err(StoreError::Protocol(format!(
            "HTTP paths cannot be globbed: {path}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Whether `request` holds a complete head plus any declared body.
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let body_len = text
            .lines()
            .find_map(|line| line.to_ascii_lowercase().strip_prefix("content-length:").map(str::to_owned))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= head_end + 4 + body_len
    }

    fn one_shot_server(response: &'static str) -> (String, std::thread::JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&request) {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        // Driver paths carry no scheme; the driver re-prefixes its own.
        (format!("{addr}/object"), handle)
    }

    #[test]
    fn get_returns_body() {
        let (path, _server) =
            one_shot_server("HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\nblob");
        let driver = HttpDriver::new(Arc::new(Pool::new(1, 0).unwrap()));
        assert_eq!(driver.get_bytes(&path).unwrap(), b"blob");
    }

    #[test]
    fn get_non_ok_is_not_found() {
        let (path, _server) =
            one_shot_server("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
        let driver = HttpDriver::new(Arc::new(Pool::new(1, 0).unwrap()));
        let err = driver.get_bytes(&path).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn put_sends_body() {
        let (path, server) =
            one_shot_server("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
        let driver = HttpDriver::new(Arc::new(Pool::new(1, 0).unwrap()));
        driver.put(&path, b"uploaded bytes").unwrap();
        let request = server.join().unwrap();
        let request = String::from_utf8_lossy(&request);
        assert!(request.starts_with("PUT /object"));
        assert!(request.ends_with("uploaded bytes"));
    }

    #[test]
    fn put_non_ok_is_write_error() {
        let (path, _server) =
            one_shot_server("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n");
        let driver = HttpDriver::new(Arc::new(Pool::new(1, 0).unwrap()));
        let err = driver.put(&path, b"x").unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
    }

    #[test]
    fn glob_is_rejected() {
        let driver = HttpDriver::new(Arc::new(Pool::new(1, 0).unwrap()));
        let err = driver.glob("example.com/*", false).unwrap_err();
        assert!(matches!(err, StoreError::Protocol(_)));
    }
}
