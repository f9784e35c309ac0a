//! Jobcheck Domain - Core harness types
//!
//! This crate defines the domain model for the jobcheck smoke-test harness:
//! request and response descriptions, recorded test results, the job-board
//! records the harness observes, and the harness configuration.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod job;
pub mod request;
pub mod response;
pub mod testing;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HarnessConfig};
pub use error::{DomainError, DomainResult};
pub use job::{JobCategory, JobRecord, NewJob};
pub use testing::{CheckStatus, HarnessState, Summary, TestResult};
