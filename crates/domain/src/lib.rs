//! Alumni Probe Domain - Core types
//!
//! This crate defines the domain model for the Alumni Probe harness:
//! request and response descriptions, the bearer credential, the
//! test result log and the alumni network API payloads.
//! All types here are pure Rust with no I/O dependencies.

pub mod alumni;
pub mod auth;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use auth::Credential;
pub use endpoint::{BaseUrl, DEFAULT_BASE_URL};
pub use error::{DomainError, DomainResult};
pub use request::{Header, Headers, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, empty_object, parse_body_or_empty};
pub use testing::{RunSummary, TestCase, TestLog, TestResult};
