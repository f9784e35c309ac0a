//! Job-board scenarios.
//!
//! Each scenario encodes one expected behaviour of the job-board API as a
//! sequence of harness checks plus assertions on the parsed bodies.

mod categories;
mod creation;
mod health;
mod listing;

use async_trait::async_trait;
use thiserror::Error;

use crate::harness::Harness;
use crate::ports::HttpClient;

pub use categories::AcceptCategories;
pub use creation::{CreateValidJob, CreatedJobListed, RejectInvalidJobs};
pub use health::HealthCheck;
pub use listing::ListJobs;

/// Status endpoint.
pub const HEALTH_PATH: &str = "api";

/// Job collection endpoint.
pub const JOBS_PATH: &str = "api/jobs";

/// Verdict of a scenario that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    Failed,
    /// Every check passed and the API created a job with this id.
    Created {
        /// Identifier assigned by the server
        id: String,
    },
}

impl ScenarioOutcome {
    /// Maps a boolean verdict to an outcome.
    #[must_use]
    pub const fn from_passed(passed: bool) -> Self {
        if passed { Self::Passed } else { Self::Failed }
    }
}

/// A scenario could not run to completion.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A payload could not be encoded, or a body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named behaviour of the API under test.
#[async_trait]
pub trait Scenario<C: HttpClient + 'static>: Send + Sync {
    /// Name shown in the per-scenario report line.
    fn name(&self) -> &'static str;

    /// Runs the scenario's checks against `harness`.
    ///
    /// # Errors
    ///
    /// Returns an error when the scenario cannot continue; failed checks are
    /// not errors and are reported through [`ScenarioOutcome::Failed`].
    async fn run(&self, harness: &mut Harness<C>) -> Result<ScenarioOutcome, ScenarioError>;
}

/// The job-board suite, in execution order.
#[must_use]
pub fn standard_scenarios<C: HttpClient + 'static>() -> Vec<Box<dyn Scenario<C>>> {
    vec![
        Box::new(HealthCheck),
        Box::new(ListJobs),
        Box::new(CreateValidJob),
        Box::new(RejectInvalidJobs),
        Box::new(AcceptCategories),
        Box::new(CreatedJobListed),
    ]
}
