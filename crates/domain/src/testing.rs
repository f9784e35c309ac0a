//! Recorded check results and their aggregation.
//!
//! Every check the harness performs ends up as one [`TestResult`] inside a
//! [`HarnessState`]. The state only grows; a [`Summary`] is derived from it
//! at the end of a run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// The check met its expectation.
    Pass,
    /// The check did not meet its expectation.
    Fail,
}

impl CheckStatus {
    /// Returns the status label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recorded outcome of one check. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    name: String,
    status: CheckStatus,
    details: String,
}

impl TestResult {
    /// Creates a result with an explicit status.
    #[must_use]
    pub fn new(name: impl Into<String>, status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            details: details.into(),
        }
    }

    /// Creates a passed result.
    #[must_use]
    pub fn pass(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Pass, details)
    }

    /// Creates a failed result.
    #[must_use]
    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Fail, details)
    }

    /// Name of the check.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outcome of the check.
    #[must_use]
    pub const fn status(&self) -> CheckStatus {
        self.status
    }

    /// Human-readable detail text.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns true if the check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Counters and results accumulated over a run.
///
/// Invariants: `tests_passed <= tests_run` and `results.len() == tests_run`.
/// [`HarnessState::record`] is the only mutator, so both hold at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HarnessState {
    tests_run: usize,
    tests_passed: usize,
    results: Vec<TestResult>,
}

impl HarnessState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tests_run: 0,
            tests_passed: 0,
            results: Vec::new(),
        }
    }

    /// Appends a result and updates the counters.
    pub fn record(&mut self, result: TestResult) -> &TestResult {
        self.tests_run += 1;
        if result.passed() {
            self.tests_passed += 1;
        }
        self.results.push(result);
        &self.results[self.results.len() - 1]
    }

    /// Number of checks performed.
    #[must_use]
    pub const fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Number of checks that passed.
    #[must_use]
    pub const fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Results in recording order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Derives the run summary. Pure; repeated calls yield equal values.
    #[must_use]
    pub const fn summary(&self) -> Summary {
        Summary {
            tests_run: self.tests_run,
            tests_passed: self.tests_passed,
        }
    }
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of checks performed.
    pub tests_run: usize,
    /// Number of checks that passed.
    pub tests_passed: usize,
}

impl Summary {
    /// Number of checks that failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.tests_run.saturating_sub(self.tests_passed)
    }

    /// Returns true if every check passed (vacuously true for an empty run).
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }

    /// Pass rate as a percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.tests_run == 0 {
            100.0
        } else {
            (self.tests_passed as f64 / self.tests_run as f64) * 100.0
        }
    }

    /// Process exit code: 0 on full success, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} tests passed", self.tests_passed, self.tests_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_keeps_counters_in_step() {
        let mut state = HarnessState::new();
        state.record(TestResult::pass("API Health Check", "Status: 200"));
        state.record(TestResult::fail("Get All Jobs", "Expected 200, got 500"));
        state.record(TestResult::pass("Jobs Data Validation", "Retrieved 2 jobs"));

        assert_eq!(state.tests_run(), 3);
        assert_eq!(state.tests_passed(), 2);
        assert_eq!(state.results().len(), state.tests_run());
        assert_eq!(state.results()[1].status(), CheckStatus::Fail);
    }

    #[test]
    fn summary_is_idempotent() {
        let mut state = HarnessState::new();
        state.record(TestResult::fail("Create Job (Valid Data)", "Expected 201, got 400"));
        let first = state.summary();
        let second = state.summary();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.to_string(), "0/1 tests passed");
    }

    #[test]
    fn exit_code_reflects_failures() {
        let clean = Summary {
            tests_run: 4,
            tests_passed: 4,
        };
        assert_eq!(clean.exit_code(), 0);
        assert_eq!(clean.failed(), 0);

        let broken = Summary {
            tests_run: 4,
            tests_passed: 3,
        };
        assert_eq!(broken.exit_code(), 1);
        assert_eq!(broken.failed(), 1);
        assert!((broken.pass_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_run_counts_as_success() {
        let summary = HarnessState::new().summary();
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn status_serializes_uppercase() {
        let result = TestResult::pass("API Health Check", "Status: 200");
        let json = serde_json::to_string(&result).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"name":"API Health Check","status":"PASS","details":"Status: 200"}"#
        );
    }
}
