//! Job creation scenarios: valid payloads, malformed payloads, and the
//! round trip from creation to listing.

use async_trait::async_trait;
use chrono::Local;
use jobcheck_domain::job::{CREATED_JOB_FIELDS, missing_fields, record_id};
use jobcheck_domain::{JobCategory, JobRecord, NewJob};
use serde_json::{Value, json};

use super::{JOBS_PATH, Scenario, ScenarioError, ScenarioOutcome};
use crate::harness::{Check, Harness};
use crate::ports::HttpClient;

fn timestamp() -> String {
    Local::now().format("%H%M%S").to_string()
}

/// A well-formed job is created with 201 and echoed back with an id.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateValidJob;

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for CreateValidJob {
    fn name(&self) -> &'static str {
        "Valid creation"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        let job = NewJob::remote(
            format!("Test Job {}", timestamp()),
            "Test Company Inc",
            JobCategory::Development,
            "This is a test job posting created by automated testing.",
        );
        let outcome = harness
            .run_check(
                Check::post("Create Job (Valid Data)", JOBS_PATH, serde_json::to_value(&job)?)
                    .expect(201),
            )
            .await;
        if !outcome.passed {
            return Ok(ScenarioOutcome::Failed);
        }

        let missing = missing_fields(&outcome.data, CREATED_JOB_FIELDS);
        if !missing.is_empty() {
            harness.record(
                "Created Job Response Validation",
                false,
                format!("Missing fields in response: {}", missing.join(", ")),
            );
            return Ok(ScenarioOutcome::Failed);
        }

        match record_id(&outcome.data) {
            Some(id) => {
                harness.record(
                    "Created Job Response Validation",
                    true,
                    format!("Job created with ID: {id}"),
                );
                Ok(ScenarioOutcome::Created { id })
            }
            None => {
                harness.record(
                    "Created Job Response Validation",
                    false,
                    "Job created with ID: N/A",
                );
                Ok(ScenarioOutcome::Failed)
            }
        }
    }
}

/// Malformed payloads are rejected with 400.
///
/// Every case runs even after a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectInvalidJobs;

impl RejectInvalidJobs {
    fn cases() -> Vec<(Value, &'static str)> {
        vec![
            (json!({}), "Empty data"),
            (
                json!({"title": "Test"}),
                "Missing company, category, location, description",
            ),
            (
                json!({"title": "Test", "company": "Test Co"}),
                "Missing category, location, description",
            ),
            (
                json!({
                    "title": "",
                    "company": "Test Co",
                    "category": "Development",
                    "location": "Remote",
                    "description": "Test",
                }),
                "Empty title",
            ),
        ]
    }
}

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for RejectInvalidJobs {
    fn name(&self) -> &'static str {
        "Invalid creation"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        let mut all_passed = true;
        for (payload, label) in Self::cases() {
            let outcome = harness
                .run_check(
                    Check::post(format!("Create Job Invalid ({label})"), JOBS_PATH, payload)
                        .expect(400),
                )
                .await;
            all_passed &= outcome.passed;
        }
        Ok(ScenarioOutcome::from_passed(all_passed))
    }
}

/// A created job shows up in the job listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreatedJobListed;

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for CreatedJobListed {
    fn name(&self) -> &'static str {
        "Created job listed"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        let job = NewJob::remote(
            format!("Listed Job {}", timestamp()),
            "Test Company",
            JobCategory::Other,
            "Test job expected to appear in the listing",
        );
        let created = harness
            .run_check(
                Check::post("Create Job For Listing", JOBS_PATH, serde_json::to_value(&job)?)
                    .expect(201),
            )
            .await;
        if !created.passed {
            return Ok(ScenarioOutcome::Failed);
        }
        let record: JobRecord = serde_json::from_value(created.data)?;

        let listed = harness
            .run_check(Check::get("Get Jobs After Create", JOBS_PATH).expect(200))
            .await;
        if !listed.passed {
            return Ok(ScenarioOutcome::Failed);
        }
        let Some(jobs) = listed.data.as_array() else {
            harness.record("Jobs Response Format", false, "Response is not a list");
            return Ok(ScenarioOutcome::Failed);
        };

        let found = jobs
            .iter()
            .any(|listed| record_id(listed).as_deref() == Some(record.id.as_str()));
        let details = if found {
            format!("Job {} present in listing", record.id)
        } else {
            format!("Job {} missing from listing", record.id)
        };
        harness.record("Created Job Listed", found, details);
        Ok(ScenarioOutcome::from_passed(found))
    }
}
