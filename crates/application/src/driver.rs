//! The run driver.
//!
//! A [`Driver`] owns the harness and the ordered scenario list. Running it
//! consumes it: every scenario executes once, in order, and the result is a
//! [`RunReport`] from which the process exit code is derived.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::FutureExt;
use jobcheck_domain::{HarnessState, Summary};
use serde::Serialize;
use tracing::{info, warn};

use crate::harness::Harness;
use crate::ports::HttpClient;
use crate::scenarios::{Scenario, ScenarioOutcome, standard_scenarios};

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    Failed,
    /// Every check passed and a job was created.
    Created {
        /// Identifier assigned by the server
        id: String,
    },
    /// The scenario stopped with an error.
    Errored {
        /// Error description
        message: String,
    },
}

impl ScenarioStatus {
    /// Returns true for `Passed` and `Created`.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Passed | Self::Created { .. })
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed | Self::Created { .. } => "PASS",
            Self::Failed => "FAIL",
            Self::Errored { .. } => "ERROR",
        }
    }
}

impl From<ScenarioOutcome> for ScenarioStatus {
    fn from(outcome: ScenarioOutcome) -> Self {
        match outcome {
            ScenarioOutcome::Passed => Self::Passed,
            ScenarioOutcome::Failed => Self::Failed,
            ScenarioOutcome::Created { id } => Self::Created { id },
        }
    }
}

/// Outcome line for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// How it ended
    #[serde(flatten)]
    pub status: ScenarioStatus,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Base URL the run targeted
    pub base_url: String,
    /// One entry per scenario, in execution order
    pub scenarios: Vec<ScenarioReport>,
    /// Every recorded check
    pub state: HarnessState,
    /// Totals
    pub summary: Summary,
}

impl RunReport {
    /// 0 if every check passed, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.summary.exit_code()
    }
}

/// Runs scenarios in a fixed order against one harness.
pub struct Driver<C: HttpClient + 'static> {
    harness: Harness<C>,
    scenarios: Vec<Box<dyn Scenario<C>>>,
}

impl<C: HttpClient + 'static> Driver<C> {
    /// Creates a driver for the given scenarios.
    pub fn new(harness: Harness<C>, scenarios: Vec<Box<dyn Scenario<C>>>) -> Self {
        Self { harness, scenarios }
    }

    /// Creates a driver for the job-board suite.
    pub fn standard(harness: Harness<C>) -> Self {
        Self::new(harness, standard_scenarios())
    }

    /// Runs every scenario and summarizes the results.
    ///
    /// A scenario that returns an error or panics is recorded as one failed
    /// check named after it; later scenarios still run.
    pub async fn run(mut self) -> RunReport {
        let started_at = Utc::now();
        let base_url = self.harness.config().base_url().to_string();
        let reporter = Arc::clone(self.harness.reporter());

        info!(%base_url, scenarios = self.scenarios.len(), "starting run");
        reporter.run_started(&base_url);

        let mut reports = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            let name = scenario.name();
            let result = AssertUnwindSafe(scenario.run(&mut self.harness))
                .catch_unwind()
                .await;
            let status = match result {
                Ok(Ok(outcome)) => ScenarioStatus::from(outcome),
                Ok(Err(error)) => abort(&mut self.harness, name, error.to_string()),
                Err(payload) => abort(
                    &mut self.harness,
                    name,
                    format!("panicked: {}", panic_message(payload.as_ref())),
                ),
            };

            let report = ScenarioReport {
                name: name.to_string(),
                status,
            };
            reporter.scenario_finished(&report);
            reports.push(report);
        }

        let summary = self.harness.summary();
        info!(
            tests_run = summary.tests_run,
            tests_passed = summary.tests_passed,
            pass_rate = summary.pass_rate(),
            "run finished"
        );
        reporter.run_finished(&summary);

        RunReport {
            started_at,
            base_url,
            scenarios: reports,
            state: self.harness.into_state(),
            summary,
        }
    }
}

fn abort<C: HttpClient + 'static>(
    harness: &mut Harness<C>,
    name: &str,
    message: String,
) -> ScenarioStatus {
    warn!(scenario = name, error = %message, "scenario aborted");
    harness.record(format!("{name} (scenario error)"), false, message.clone());
    ScenarioStatus::Errored { message }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
