//! Profile and directory search payloads

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Path of the authenticated user's profile.
pub const PROFILE_PATH: &str = "api/user/profile";
/// Path of the user directory search.
pub const USER_SEARCH_PATH: &str = "api/users/search";

/// Body of `PUT api/user/profile`. Only the listed fields are changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub full_name: String,
    /// New location
    pub current_location: String,
    /// New phone
    pub phone: String,
}

/// Query of `GET api/users/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchQuery {
    /// Free-text search term
    pub q: String,
}

impl UserSearchQuery {
    /// Creates a query for `term`.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self { q: term.into() }
    }

    /// Search path including the encoded query string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if the query cannot be encoded.
    pub fn to_path(&self) -> DomainResult<String> {
        let query =
            serde_urlencoded::to_string(self).map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
        Ok(format!("{USER_SEARCH_PATH}?{query}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_path() {
        assert_eq!(
            UserSearchQuery::new("test").to_path().unwrap(),
            "api/users/search?q=test"
        );
    }

    #[test]
    fn test_search_term_is_encoded() {
        assert_eq!(
            UserSearchQuery::new("jane doe&co").to_path().unwrap(),
            "api/users/search?q=jane+doe%26co"
        );
    }
}
