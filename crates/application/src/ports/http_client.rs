//! HTTP Client port

use std::future::Future;

use alumni_probe_domain::{Headers, HttpMethod, ResponseSpec};
use thiserror::Error;

/// A fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// Headers to send, in order
    pub headers: Headers,
    /// JSON body, if any
    pub body: Option<serde_json::Value>,
}

/// Transport-level failures: no HTTP response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve
        host: String,
        /// Resolver message
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection could not be established or was dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport gave up waiting.
    #[error("request timed out")]
    Timeout,

    /// The request body could not be sent or the response body read.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, so the runner can
/// be driven by an in-memory backend in tests.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code is a successful execution; only transport failures
    /// are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
