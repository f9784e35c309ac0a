//! API liveness check.

use async_trait::async_trait;

use super::{HEALTH_PATH, Scenario, ScenarioError, ScenarioOutcome};
use crate::harness::{Check, Harness};
use crate::ports::HttpClient;

/// `GET /api` answers 200.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthCheck;

#[async_trait]
impl<C: HttpClient + 'static> Scenario<C> for HealthCheck {
    fn name(&self) -> &'static str {
        "Health check"
    }

    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError> {
        let outcome = harness
            .run_check(Check::get("API Health Check", HEALTH_PATH).expect(200))
            .await;
        Ok(ScenarioOutcome::from_passed(outcome.passed))
    }
}
