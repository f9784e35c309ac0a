//! The check harness.
//!
//! A [`Harness`] sends one request per [`Check`], compares the status code
//! with the expectation and records exactly one [`TestResult`]. It never
//! returns an error: transport failures and mismatches become FAIL results
//! and an empty [`CheckOutcome`], so scenarios can chain checks freely.

use std::sync::Arc;
use std::time::Duration;

use jobcheck_domain::request::{HttpMethod, RequestSpec};
use jobcheck_domain::response::ResponseSpec;
use jobcheck_domain::{HarnessConfig, HarnessState, Summary, TestResult};
use serde_json::Value;
use tracing::{debug, warn};

use crate::ports::{HttpClient, HttpClientError, Reporter, SilentReporter};

/// Characters of a non-JSON error body quoted in failure details.
const BODY_PREVIEW_CHARS: usize = 200;

/// One expected HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    /// Name recorded in the result
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL
    pub path: String,
    /// Status code the check expects
    pub expected_status: u16,
    /// JSON payload
    pub body: Option<Value>,
    /// Overrides the configured timeout
    pub timeout: Option<Duration>,
}

impl Check {
    /// Creates a check expecting `200 OK`.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            expected_status: 200,
            body: None,
            timeout: None,
        }
    }

    /// Creates a GET check.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    /// Creates a POST check carrying `body`.
    #[must_use]
    pub fn post(name: impl Into<String>, path: impl Into<String>, body: Value) -> Self {
        Self::new(name, HttpMethod::Post, path).with_body(body)
    }

    /// Sets the expected status code.
    #[must_use]
    pub const fn expect(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a timeout for this check only.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What a check hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Whether the check passed
    pub passed: bool,
    /// Parsed JSON body on a pass, `Value::Null` otherwise
    pub data: Value,
}

impl CheckOutcome {
    const fn failed() -> Self {
        Self {
            passed: false,
            data: Value::Null,
        }
    }

    const fn passed(data: Value) -> Self {
        Self { passed: true, data }
    }
}

/// Executes checks and accumulates their results.
pub struct Harness<C: HttpClient> {
    client: Arc<C>,
    config: HarnessConfig,
    state: HarnessState,
    reporter: Arc<dyn Reporter>,
}

impl<C: HttpClient> Harness<C> {
    /// Creates a harness that reports nothing.
    pub fn new(client: Arc<C>, config: HarnessConfig) -> Self {
        Self {
            client,
            config,
            state: HarnessState::new(),
            reporter: Arc::new(SilentReporter),
        }
    }

    /// Sets the reporter notified of every recorded result.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Configuration in use.
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Reporter in use.
    pub const fn reporter(&self) -> &Arc<dyn Reporter> {
        &self.reporter
    }

    /// Results so far.
    pub const fn state(&self) -> &HarnessState {
        &self.state
    }

    /// Summary of the results so far.
    pub const fn summary(&self) -> Summary {
        self.state.summary()
    }

    /// Consumes the harness, returning its accumulated state.
    pub fn into_state(self) -> HarnessState {
        self.state
    }

    /// Sends the request described by `check` and records the outcome.
    pub async fn run_check(&mut self, check: Check) -> CheckOutcome {
        let Check {
            name,
            method,
            path,
            expected_status,
            body,
            timeout,
        } = check;
        let timeout = timeout.unwrap_or_else(|| self.config.timeout());

        let mut request = RequestSpec::new(method, self.config.endpoint(&path)).with_timeout(timeout);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        debug!(check = %name, method = %request.method, url = %request.url, "sending request");
        match self.client.execute(&request).await {
            Ok(response) => self.evaluate(name, expected_status, &response),
            Err(error) => {
                warn!(check = %name, url = %request.url, %error, "request failed");
                self.record(name, false, describe_transport_error(&error, timeout));
                CheckOutcome::failed()
            }
        }
    }

    /// Records a secondary assertion, typically about a parsed body.
    ///
    /// Counts towards the totals exactly like a request check and returns
    /// `passed` for convenient chaining.
    pub fn record(&mut self, name: impl Into<String>, passed: bool, details: impl Into<String>) -> bool {
        let result = if passed {
            TestResult::pass(name, details)
        } else {
            TestResult::fail(name, details)
        };
        let recorded = self.state.record(result);
        self.reporter.check_recorded(recorded);
        passed
    }

    fn evaluate(&mut self, name: String, expected: u16, response: &ResponseSpec) -> CheckOutcome {
        let actual = response.status;
        debug!(check = %name, status = actual, elapsed_ms = response.duration.as_millis(), "response received");

        if actual != expected {
            let details = match response.json() {
                Some(error) => format!("Expected {expected}, got {actual}. Error: {error}"),
                None => format!(
                    "Expected {expected}, got {actual}. Response: {}",
                    response.body_preview(BODY_PREVIEW_CHARS)
                ),
            };
            self.record(name, false, details);
            return CheckOutcome::failed();
        }

        match response.json() {
            Some(data) => {
                self.record(name, true, format!("Status: {actual}"));
                CheckOutcome::passed(data)
            }
            None => {
                self.record(name, true, format!("Status: {actual} (No JSON response)"));
                CheckOutcome::passed(Value::Null)
            }
        }
    }
}

fn describe_transport_error(error: &HttpClientError, timeout: Duration) -> String {
    match error {
        HttpClientError::Timeout { .. } => {
            format!("Request timeout after {}", format_timeout(timeout))
        }
        e if e.is_connection() => "Connection error - server may be down".to_string(),
        other => format!("Error: {other}"),
    }
}

fn format_timeout(timeout: Duration) -> String {
    if timeout.subsec_millis() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}
