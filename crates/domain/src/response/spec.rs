//! Response specification type

use std::time::Duration;

use serde_json::Value;

use crate::request::Headers;

/// HTTP response as observed by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body as text
    pub body: String,
    /// Response time
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: impl Into<String>, duration: Duration) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            duration,
        }
    }

    /// Parses the body as JSON.
    ///
    /// Returns `None` for an empty or non-JSON body.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns at most `max_chars` characters of the body.
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((end, _)) => &self.body[..end],
            None => &self.body,
        }
    }
}

impl Default for ResponseSpec {
    fn default() -> Self {
        Self {
            status: 0,
            headers: Headers::new(),
            body: String::new(),
            duration: Duration::ZERO,
        }
    }
}
