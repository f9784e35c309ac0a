//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the harness and external systems.
//! Each port is a trait implemented by an adapter in the infrastructure layer.

mod http_client;
mod reporter;

pub use http_client::{HttpClient, HttpClientError};
pub use reporter::{Reporter, SilentReporter};
