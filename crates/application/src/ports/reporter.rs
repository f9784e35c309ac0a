//! Progress reporting port

use jobcheck_domain::{Summary, TestResult};

use crate::driver::ScenarioReport;

/// Receives progress events while a run executes.
///
/// All methods default to doing nothing so adapters only implement what they
/// display.
pub trait Reporter: Send + Sync {
    /// Called once before the first scenario.
    fn run_started(&self, _base_url: &str) {}

    /// Called after every recorded check.
    fn check_recorded(&self, _result: &TestResult) {}

    /// Called after each scenario, including ones that returned an error.
    fn scenario_finished(&self, _report: &ScenarioReport) {}

    /// Called once after the last scenario.
    fn run_finished(&self, _summary: &Summary) {}
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}
