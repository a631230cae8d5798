//! Bearer credential issued by the alumni API.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Opaque bearer token returned by a successful registration.
///
/// Never empty. `Debug` output is redacted so tokens don't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCredential`] if `token` is empty.
    pub fn new(token: impl Into<String>) -> DomainResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(token))
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(Credential::new(""), Err(DomainError::EmptyCredential));
    }

    #[test]
    fn test_bearer_value() {
        let credential = Credential::new("abc.def").unwrap();
        assert_eq!(credential.as_str(), "abc.def");
        assert_eq!(credential.bearer(), "Bearer abc.def");
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("secret-token").unwrap();
        assert!(!format!("{credential:?}").contains("secret-token"));
    }
}
