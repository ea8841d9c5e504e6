//! End-to-end tester for the course management server
//!
//! Drives a running server over HTTP with [`ApiClient`] and checks the
//! observable behavior of each scenario.

pub mod api_client;
pub mod scenarios;

pub use api_client::{ApiClient, ApiStatusError, status_of};
pub use scenarios::{SCENARIOS, run_scenario};
