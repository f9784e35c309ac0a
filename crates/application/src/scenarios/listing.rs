//! Job listing retrieval and record shape.

use async_trait::async_trait;
use jobcheck_domain::job::{LISTED_JOB_FIELDS, missing_fields};

use super::{JOBS_PATH, Scenario, ScenarioError, ScenarioOutcome};
use crate::harness::{Check, Harness};
use crate::ports::HttpClient;

/// `GET /api/jobs` answers 200 with a list of well-formed jobs.
///
/// Only the first job's shape is inspected.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListJobs;

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for ListJobs {
    fn name(&self) -> &'static str {
        "List retrieval"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        let outcome = harness
            .run_check(Check::get("Get All Jobs", JOBS_PATH).expect(200))
            .await;
        if !outcome.passed {
            return Ok(ScenarioOutcome::Failed);
        }

        let Some(jobs) = outcome.data.as_array() else {
            harness.record("Jobs Response Format", false, "Response is not a list");
            return Ok(ScenarioOutcome::Failed);
        };
        harness.record(
            "Jobs Data Validation",
            true,
            format!("Retrieved {} jobs", jobs.len()),
        );

        if let Some(first) = jobs.first() {
            let missing = missing_fields(first, LISTED_JOB_FIELDS);
            if !missing.is_empty() {
                harness.record(
                    "Job Structure Validation",
                    false,
                    format!("Missing fields: {}", missing.join(", ")),
                );
                return Ok(ScenarioOutcome::Failed);
            }
            harness.record("Job Structure Validation", true, "All required fields present");
        }

        Ok(ScenarioOutcome::Passed)
    }
}
