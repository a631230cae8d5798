//! Alumni Probe Application - Test runner, ports and case catalog
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP transport, clock, result reporting)
//! - The session held across cases
//! - The `TestRunner` call executor and result logger
//! - The fixed catalog of alumni API cases and their fixtures

mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod ports;
pub mod runner;
pub mod session;

pub use config::RunnerConfig;
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, HttpClient, HttpClientError, HttpRequest, Reporter};
pub use runner::{CallOutcome, RUN_TITLE, TestRunner};
pub use session::Session;

#[cfg(test)]
mod test_support;
