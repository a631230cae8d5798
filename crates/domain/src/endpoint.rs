//! Base endpoint of the API under test.

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Endpoint used when no other base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://unialumni-net.preview.emergentagent.com";

/// Validated absolute `http`/`https` base URL without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parses and normalizes a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `raw` is not an absolute
    /// `http` or `https` URL.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {raw}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Joins a relative API path onto the base, as `{base}/{path}`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
