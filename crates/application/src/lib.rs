//! Jobcheck Application - Harness, scenarios and driver
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, progress reporter)
//! - The [`Harness`], which turns one HTTP exchange into one recorded result
//! - The job-board [`scenarios`]
//! - The [`Driver`], which runs scenarios in order and builds the final report

pub mod driver;
pub mod harness;
pub mod ports;
pub mod scenarios;

#[cfg(test)]
mod test_support;

pub use driver::{Driver, RunReport, ScenarioReport, ScenarioStatus};
pub use harness::{Check, CheckOutcome, Harness};
pub use ports::{HttpClient, HttpClientError, Reporter, SilentReporter};
pub use scenarios::{Scenario, ScenarioError, ScenarioOutcome, standard_scenarios};
