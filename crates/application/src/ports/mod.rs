//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the runner and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod reporter;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError, HttpRequest};
pub use reporter::Reporter;
