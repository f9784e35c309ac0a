//! Every job category is accepted on creation.

use async_trait::async_trait;
use jobcheck_domain::{JobCategory, NewJob};

use super::{JOBS_PATH, Scenario, ScenarioError, ScenarioOutcome};
use crate::harness::{Check, Harness};
use crate::ports::HttpClient;

/// Every [`JobCategory`] is accepted on creation.
///
/// Stops at the first rejected category.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptCategories;

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for AcceptCategories {
    fn name(&self) -> &'static str {
        "Category acceptance"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        for category in JobCategory::ALL {
            let job = NewJob::remote(
                format!("Test {category} Job"),
                "Test Company",
                category,
                format!("Test job for {category} category"),
            );
            let outcome = harness
                .run_check(
                    Check::post(
                        format!("Create Job with {category} Category"),
                        JOBS_PATH,
                        serde_json::to_value(&job)?,
                    )
                    .expect(201),
                )
                .await;
            if !outcome.passed {
                return Ok(ScenarioOutcome::Failed);
            }
        }
        Ok(ScenarioOutcome::Passed)
    }
}
