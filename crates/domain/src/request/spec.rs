//! Request specification type

use serde::{Deserialize, Serialize};

use super::{Headers, HttpMethod};
use crate::error::{DomainError, DomainResult};

/// Description of one checked API call.
///
/// `path` is relative to the base endpoint (e.g. `api/events`). The call
/// passes when the response status equals `expected_status` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Name under which the outcome is recorded
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base endpoint, may carry a query string
    pub path: String,
    /// Status code that counts as a pass
    pub expected_status: u16,
    /// JSON body sent with the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Extra headers, applied over the harness defaults
    #[serde(default)]
    pub headers: Headers,
}

impl RequestSpec {
    /// Creates a request specification without body or extra headers.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
        expected_status: u16,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            expected_status,
            body: None,
            headers: Headers::new(),
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<String>, expected_status: u16) -> Self {
        Self::new(name, HttpMethod::Get, path, expected_status)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(name: impl Into<String>, path: impl Into<String>, expected_status: u16) -> Self {
        Self::new(name, HttpMethod::Post, path, expected_status)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(name: impl Into<String>, path: impl Into<String>, expected_status: u16) -> Self {
        Self::new(name, HttpMethod::Put, path, expected_status)
    }

    /// Attaches a serialized JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Adds an extra header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }
}
