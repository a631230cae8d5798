//! Registration and login payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::Credential;

/// Registration path.
pub const REGISTER_PATH: &str = "api/auth/register";
/// Login path.
pub const LOGIN_PATH: &str = "api/auth/login";

/// Body of `POST api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Display name
    pub full_name: String,
    /// Login email, unique per user
    pub email: String,
    /// Plain-text password
    pub password: String,
    /// Graduation year
    pub passout_year: u16,
    /// City and region
    pub current_location: String,
    /// Employer
    pub current_company: String,
    /// Professional domain
    pub domain: String,
    /// Phone, expected as `(XXX) XXX-XXXX`
    pub phone: String,
}

/// Body of `POST api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Response of the register and login endpoints.
///
/// The token and the user id are read independently, so a user object of
/// an unexpected shape never hides an issued token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthResponse {
    token: Option<String>,
    user_id: Option<String>,
}

impl AuthResponse {
    /// Reads an authentication response out of a parsed body.
    ///
    /// Fields of an unexpected type are treated as absent.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        Self {
            token: body.get("token").and_then(Value::as_str).map(str::to_owned),
            user_id: body
                .get("user")
                .and_then(|user| user.get("id"))
                .and_then(id_text),
        }
    }

    /// Returns the issued token as a credential, if it is present and non-empty.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.token.as_deref().and_then(|t| Credential::new(t).ok())
    }

    /// Returns the user id as a string.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

fn id_text(id: &Value) -> Option<String> {
    match id {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
