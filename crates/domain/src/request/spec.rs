//! Request specification type

use std::time::Duration;

use serde_json::Value;

use super::{Headers, HttpMethod};
use crate::config::DEFAULT_TIMEOUT;

/// A fully resolved HTTP request, ready for an HTTP client to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// HTTP headers
    pub headers: Headers,
    /// JSON payload, serialized as the request body when present
    pub body: Option<Value>,
    /// Upper bound for the whole exchange
    pub timeout: Duration,
}

impl RequestSpec {
    /// Creates a JSON request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::json(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the timeout in whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}
