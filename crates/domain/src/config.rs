//! Harness configuration.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Job board targeted when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://hirefinder-20.preview.emergentagent.com";

/// Per-request timeout used when a check does not set its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the harness points and how long each request may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    base_url: String,
    #[serde(rename = "timeout_ms", serialize_with = "serialize_millis")]
    timeout: Duration,
}

impl HarnessConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL, and [`DomainError::InvalidTimeout`] for a zero timeout.
    pub fn new(base_url: &str, timeout: Duration) -> DomainResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "scheme must be http or https: {base_url}"
            )));
        }
        if timeout.is_zero() {
            return Err(DomainError::InvalidTimeout(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
