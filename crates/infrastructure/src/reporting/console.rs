//! Line-oriented progress reporter.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use jobcheck_application::ports::Reporter;
use jobcheck_application::{ScenarioReport, ScenarioStatus};
use jobcheck_domain::{Summary, TestResult};

const RULE_WIDTH: usize = 50;

/// Writes one line per check and per scenario, a banner and a summary.
///
/// Write errors are ignored; a closed stdout must not abort the run.
pub struct ConsoleReporter<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn emit(&self, lines: &[String]) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

fn icon(passed: bool) -> &'static str {
    if passed { "✅" } else { "❌" }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn run_started(&self, base_url: &str) {
        self.emit(&[
            "🚀 Starting Job Board API Tests...".to_string(),
            format!("Target: {base_url}"),
            "=".repeat(RULE_WIDTH),
        ]);
    }

    fn check_recorded(&self, result: &TestResult) {
        self.emit(&[format!(
            "{} {}: {}",
            icon(result.passed()),
            result.name(),
            result.details()
        )]);
    }

    fn scenario_finished(&self, report: &ScenarioReport) {
        let line = match &report.status {
            ScenarioStatus::Errored { message } => {
                format!("❌ Scenario '{}' failed with error: {message}", report.name)
            }
            ScenarioStatus::Created { id } => {
                format!("✅ Scenario '{}': PASS (created {id})", report.name)
            }
            status => format!(
                "{} Scenario '{}': {}",
                icon(status.succeeded()),
                report.name,
                status.label()
            ),
        };
        self.emit(&[line, String::new()]);
    }

    fn run_finished(&self, summary: &Summary) {
        let verdict = if summary.all_passed() {
            "🎉 All tests passed!"
        } else {
            "⚠️  Some tests failed. Check the details above."
        };
        self.emit(&[
            "=".repeat(RULE_WIDTH),
            format!("📊 Test Summary: {summary}"),
            verdict.to_string(),
        ]);
    }
}
