//! Scripted doubles shared by the unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use jobcheck_domain::request::{Headers, RequestSpec};
use jobcheck_domain::response::ResponseSpec;
use jobcheck_domain::{Summary, TestResult};
use serde_json::Value;

use crate::driver::ScenarioReport;
use crate::ports::{HttpClient, HttpClientError, Reporter};

type Scripted = Result<ResponseSpec, HttpClientError>;

/// HTTP client answering from a queue of canned responses.
///
/// Once the queue is drained every request fails with a connection error.
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockHttpClient {
    pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::ConnectionFailed("script exhausted".to_string())));
        async move { next }
    }
}

pub fn json_response(status: u16, body: Value) -> Scripted {
    Ok(ResponseSpec::new(
        status,
        Headers::json(),
        body.to_string(),
        Duration::from_millis(5),
    ))
}

pub fn text_response(status: u16, body: &str) -> Scripted {
    Ok(ResponseSpec::new(
        status,
        Headers::new(),
        body,
        Duration::from_millis(5),
    ))
}

/// Reporter that keeps a textual log of the events it receives.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&self, base_url: &str) {
        self.push(format!("start {base_url}"));
    }

    fn check_recorded(&self, result: &TestResult) {
        self.push(format!(
            "check {} {}: {}",
            result.status(),
            result.name(),
            result.details()
        ));
    }

    fn scenario_finished(&self, report: &ScenarioReport) {
        self.push(format!("scenario {} {}", report.name, report.status.label()));
    }

    fn run_finished(&self, summary: &Summary) {
        self.push(format!("finish {summary}"));
    }
}
