//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use jobcheck_domain::DEFAULT_BASE_URL;

/// Run the job board API smoke tests and exit non-zero on any failure.
#[derive(Debug, Parser)]
#[command(name = "jobcheck", version, about)]
pub struct Cli {
    /// Base URL of the job board
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Write a JSON report of the run to this file
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Log request diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("'{raw}': {e}"))
}
