//! Jobcheck - Job board API smoke tests
//!
//! Runs the standard scenario suite against a job board, prints one line per
//! check and a summary, and exits 0 only if every check passed.

mod cli;

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use jobcheck_application::{Driver, Harness, RunReport};
use jobcheck_domain::HarnessConfig;
use jobcheck_infrastructure::{ConsoleReporter, ReqwestHttpClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("jobcheck: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<u8, Box<dyn Error>> {
    let config = HarnessConfig::new(&cli.base_url, cli.timeout)?;
    let client = ReqwestHttpClient::new()?;

    // One request at a time; no worker threads needed.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let harness = Harness::new(Arc::new(client), config)
            .with_reporter(Arc::new(ConsoleReporter::stdout()));
        let report = Driver::standard(harness).run().await;

        if let Some(path) = &cli.report {
            write_report(path, &report).await?;
            tracing::info!(path = %path.display(), "report written");
        }
        Ok::<u8, Box<dyn Error>>(report.exit_code())
    })
}

async fn write_report(path: &Path, report: &RunReport) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_vec_pretty(report)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
