//! Drives the reqwest adapter and the full suite against an in-process job
//! board served by axum on a loopback port.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use jobcheck_application::{Check, Driver, Harness, HttpClient, HttpClientError, ScenarioStatus};
use jobcheck_domain::request::{HttpMethod, RequestSpec};
use jobcheck_domain::{CheckStatus, DEFAULT_TIMEOUT, HarnessConfig};
use jobcheck_infrastructure::ReqwestHttpClient;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const REQUIRED: [&str; 5] = ["title", "company", "category", "location", "description"];

#[derive(Clone)]
struct Board {
    jobs: Arc<Mutex<Vec<Value>>>,
    healthy: bool,
    validates: bool,
}

impl Board {
    fn compliant() -> Self {
        Self {
            jobs: Arc::new(Mutex::new(vec![json!({
                "id": "seed-1",
                "title": "Senior UI/UX Designer",
                "company": "Creative Studios",
                "category": "Design",
                "location": "San Francisco, CA",
                "description": "Join our creative team.",
                "postedDate": "2025-01-10T00:00:00.000Z",
            })])),
            healthy: true,
            validates: true,
        }
    }
}

async fn health(State(board): State<Board>) -> (StatusCode, Json<Value>) {
    if board.healthy {
        (StatusCode::OK, Json(json!({"status": "ok"})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": "maintenance"})),
        )
    }
}

async fn list_jobs(State(board): State<Board>) -> Json<Value> {
    Json(Value::Array(board.jobs.lock().unwrap().clone()))
}

async fn create_job(
    State(board): State<Board>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let present = |field: &str| {
        payload
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|v| !v.is_empty())
    };
    if board.validates && !REQUIRED.iter().all(|f| present(f)) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "All fields are required"})),
        );
    }

    let mut jobs = board.jobs.lock().unwrap();
    let mut record = payload.as_object().cloned().unwrap_or_default();
    record.insert("id".to_string(), json!(format!("job-{}", jobs.len() + 1)));
    record.insert("postedDate".to_string(), json!("2026-10-14T09:30:00.000Z"));
    let record = Value::Object(record);
    jobs.insert(0, record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn echo_content_type(headers: HeaderMap) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({"content_type": content_type}))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "late"
}

async fn spawn_board(board: Board) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/api", get(health))
        .route("/api/jobs", get(list_jobs).post(create_job))
        .route("/echo", get(echo_content_type))
        .route("/slow", get(slow))
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .with_state(board);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn harness(base_url: &str) -> Harness<ReqwestHttpClient> {
    let client = ReqwestHttpClient::new().unwrap();
    Harness::new(
        Arc::new(client),
        HarnessConfig::new(base_url, DEFAULT_TIMEOUT).unwrap(),
    )
}

#[tokio::test]
async fn healthy_api_records_pass() {
    let base_url = spawn_board(Board::compliant()).await;
    let mut harness = harness(&base_url);

    let outcome = harness.run_check(Check::get("API Health Check", "api")).await;

    assert!(outcome.passed);
    assert_eq!(outcome.data, json!({"status": "ok"}));
    let result = &harness.state().results()[0];
    assert_eq!(result.status(), CheckStatus::Pass);
    assert!(result.details().contains("200"));
}

#[tokio::test]
async fn unavailable_api_records_both_codes() {
    let base_url = spawn_board(Board {
        healthy: false,
        ..Board::compliant()
    })
    .await;
    let mut harness = harness(&base_url);

    let outcome = harness.run_check(Check::get("API Health Check", "api")).await;

    assert!(!outcome.passed);
    let details = harness.state().results()[0].details().to_string();
    assert!(details.contains("200"));
    assert!(details.contains("503"));
}

#[tokio::test]
async fn empty_payload_rejected_by_compliant_board() {
    let base_url = spawn_board(Board::compliant()).await;
    let mut harness = harness(&base_url);

    let outcome = harness
        .run_check(Check::post("Create Job Invalid (Empty data)", "api/jobs", json!({})).expect(400))
        .await;

    assert!(outcome.passed);
    assert_eq!(harness.summary().tests_passed, 1);
}

#[tokio::test]
async fn empty_payload_accepted_by_lenient_board_fails() {
    let base_url = spawn_board(Board {
        validates: false,
        ..Board::compliant()
    })
    .await;
    let mut harness = harness(&base_url);

    let outcome = harness
        .run_check(Check::post("Create Job Invalid (Empty data)", "api/jobs", json!({})).expect(400))
        .await;

    assert!(!outcome.passed);
    assert!(
        harness.state().results()[0]
            .details()
            .starts_with("Expected 400, got 201")
    );
}

#[tokio::test]
async fn json_content_type_is_sent() {
    let base_url = spawn_board(Board::compliant()).await;
    let mut harness = harness(&base_url);

    let outcome = harness.run_check(Check::get("Echo", "echo")).await;

    assert_eq!(outcome.data, json!({"content_type": "application/json"}));
}

#[tokio::test]
async fn slow_response_times_out() {
    let base_url = spawn_board(Board::compliant()).await;
    let mut harness = harness(&base_url);

    let outcome = harness
        .run_check(Check::get("Slow", "slow").with_timeout(Duration::from_millis(200)))
        .await;

    assert!(!outcome.passed);
    assert_eq!(
        harness.state().results()[0].details(),
        "Request timeout after 200ms"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_failed_check() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut harness = harness(&format!("http://{addr}"));

    let outcome = harness.run_check(Check::get("API Health Check", "api")).await;

    assert!(!outcome.passed);
    assert_eq!(
        harness.state().results()[0].details(),
        "Connection error - server may be down"
    );
    assert_eq!(harness.summary().tests_run, 1);
}

#[tokio::test]
async fn unresolvable_host_is_a_connection_error() {
    let client = ReqwestHttpClient::new().unwrap();
    let request = RequestSpec::new(HttpMethod::Get, "http://jobboard.invalid/api")
        .with_timeout(Duration::from_secs(5));

    let error = client.execute(&request).await.unwrap_err();
    assert!(
        matches!(error, HttpClientError::DnsError { ref host, .. } if host == "jobboard.invalid"),
        "unexpected error: {error:?}"
    );

    let mut harness = harness("http://jobboard.invalid");
    let outcome = harness.run_check(Check::get("API Health Check", "api")).await;

    assert!(!outcome.passed);
    assert_eq!(
        harness.state().results()[0].details(),
        "Connection error - server may be down"
    );
}

#[tokio::test]
async fn redirect_loop_stops_at_the_limit() {
    let base_url = spawn_board(Board::compliant()).await;
    let mut harness = harness(&base_url);

    let outcome = harness.run_check(Check::get("Loop", "loop")).await;

    assert!(!outcome.passed);
    assert_eq!(
        harness.state().results()[0].details(),
        "Error: stopped after 10 redirects"
    );
}

#[tokio::test]
async fn truncated_body_is_a_generic_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 1024];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"jobs\"")
            .await;
    });
    let mut harness = harness(&format!("http://{addr}"));

    let outcome = harness.run_check(Check::get("Get All Jobs", "api/jobs")).await;

    assert!(!outcome.passed);
    let result = &harness.state().results()[0];
    assert!(result.details().starts_with("Error: "), "{}", result.details());
    assert_eq!(result.status(), CheckStatus::Fail);
}

#[tokio::test]
async fn standard_suite_passes_against_compliant_board() {
    let base_url = spawn_board(Board::compliant()).await;

    let report = Driver::standard(harness(&base_url)).run().await;

    let failures: Vec<_> = report
        .state
        .results()
        .iter()
        .filter(|r| !r.passed())
        .map(|r| format!("{}: {}", r.name(), r.details()))
        .collect();
    assert_eq!(failures, Vec::<String>::new());
    assert_eq!(report.exit_code(), 0);
    assert!(matches!(
        report.scenarios[2].status,
        ScenarioStatus::Created { .. }
    ));
}

#[tokio::test]
async fn standard_suite_fails_against_lenient_board() {
    let base_url = spawn_board(Board {
        validates: false,
        ..Board::compliant()
    })
    .await;

    let report = Driver::standard(harness(&base_url)).run().await;

    assert_eq!(report.exit_code(), 1);
    let invalid = report
        .scenarios
        .iter()
        .find(|s| s.name == "Invalid creation")
        .unwrap();
    assert_eq!(invalid.status, ScenarioStatus::Failed);
    assert_eq!(report.summary.failed(), 4);
}
