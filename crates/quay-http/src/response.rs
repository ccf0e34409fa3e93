/// Outcome of a single HTTP attempt.
///
/// A transport-level failure (connection refused, timeout, DNS error) is
/// represented as status 0 rather than an error value, so the retry loop
/// can treat it uniformly with 5xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// A response standing in for an attempt that never reached the server.
    pub fn transport_failure() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when another attempt may succeed: transport failure or 5xx.
    pub fn should_retry(&self) -> bool {
        self.status == 0 || self.status >= 500
    }
}
