//! HTTP client port

use std::future::Future;

use jobcheck_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

/// Transport-level failures. A response with any status code is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request did not complete within its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed
        timeout_ms: u64,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("could not resolve {host}: {message}")]
    DnsError {
        /// Target host
        host: String,
        /// Resolver message
        message: String,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns true for failures to reach the server at all.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::ConnectionRefused { .. } | Self::DnsError { .. } | Self::ConnectionFailed(_)
        )
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the harness
/// to be independent of specific HTTP libraries and to run against a scripted
/// client in tests.
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received: timeout,
    /// connection failure, or a request that could not be built.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
