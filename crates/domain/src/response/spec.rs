//! Response specification type
//!
//! Contains the status and body of a received response, plus the lenient
//! JSON parsing the harness applies to successful bodies.

use serde_json::{Map, Value};

/// HTTP response specification.
///
/// Holds what the harness inspects of an HTTP call: the status and the body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response body as a lossy UTF-8 string.
    pub body: String,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(status: u16, body: &[u8]) -> Self {
        Self {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Creates a response with a JSON body.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Parses the body as JSON, falling back to an empty object.
    #[must_use]
    pub fn json_or_empty(&self) -> Value {
        parse_body_or_empty(&self.body)
    }

    /// Returns at most `max_chars` characters of the raw body.
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((end, _)) => &self.body[..end],
            None => &self.body,
        }
    }
}

/// Returns an empty JSON object.
#[must_use]
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Parses `body` as JSON. Unparseable input yields an empty object.
#[must_use]
pub fn parse_body_or_empty(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| empty_object())
}
