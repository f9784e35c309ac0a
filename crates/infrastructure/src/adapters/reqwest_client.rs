//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It performs all network I/O for the harness.

use std::error::Error as StdError;
use std::future::Future;
use std::time::Instant;

use jobcheck_application::ports::{HttpClient, HttpClientError};
use jobcheck_domain::{
    request::{Header, Headers, HttpMethod, RequestSpec},
    response::ResponseSpec,
};
use reqwest::{Client, Method, Url};
use tracing::trace;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("jobcheck/", env!("CARGO_PKG_VERSION"));

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Timeouts are applied per request from [`RequestSpec::timeout`]; the
/// underlying client carries no global timeout.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error_chain(error);
            let lowered = message.to_lowercase();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("stopped after {MAX_REDIRECTS} redirects"));
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error and its sources into one message.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let method = request.method;
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();
        let timeout = request.timeout;
        let timeout_ms = request.timeout_ms();

        async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(timeout);

            for header in headers.iter() {
                builder = builder.header(&header.name, &header.value);
            }

            if let Some(body) = &body {
                let payload = serde_json::to_vec(body)
                    .map_err(|e| HttpClientError::InvalidBody(e.to_string()))?;
                builder = builder.body(payload);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let response_headers: Headers = response
                .headers()
                .iter()
                .map(|(k, v)| Header::new(k.as_str(), v.to_str().unwrap_or("<binary>")))
                .collect();

            let text = response
                .text()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;
            let duration = start.elapsed();
            trace!(status, bytes = text.len(), "response body read");

            Ok(ResponseSpec::new(status, response_headers, text, duration))
        }
    }
}
