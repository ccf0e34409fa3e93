use std::time::Duration;

use tracing::debug;

use crate::error::{HttpError, HttpResult};
use crate::response::Response;

/// Fixed per-attempt ceiling. Not caller-adjustable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Request headers as ordered name/value pairs.
pub type Headers = Vec<(String, String)>;

/// One reusable HTTP connection handle.
///
/// Wraps a blocking client configured once at construction: 120 second
/// request timeout, redirects followed. A transport is only ever driven
/// by a single pool guard at a time, so no internal synchronization is
/// needed beyond what the client itself provides.
pub struct Transport {
    client: reqwest::blocking::Client,
}

impl Transport {
    pub fn new() -> HttpResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Issue a GET. Any failure to reach the server or read the body is
    /// reported as a status-0 response.
    pub fn get(&self, url: &str, headers: &Headers) -> Response {
        debug!(url, "http get");
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        Self::run(request)
    }

    /// Issue a PUT with the given body. The body is sent whole with a
    /// known length, so no chunked transfer encoding and no
    /// `Expect: 100-continue` round-trip.
    pub fn put(&self, url: &str, body: &[u8], headers: &Headers) -> Response {
        debug!(url, bytes = body.len(), "http put");
        let mut request = self.client.put(url).body(body.to_vec());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        Self::run(request)
    }

    fn run(request: reqwest::blocking::RequestBuilder) -> Response {
        match request.send() {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.bytes() {
                    Ok(body) => Response::new(status, body.to_vec()),
                    Err(e) => {
                        debug!(error = %e, "failed to read response body");
                        Response::transport_failure()
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "request failed");
                Response::transport_failure()
            }
        }
    }
}
