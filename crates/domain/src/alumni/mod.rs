//! Request and response payloads of the alumni network API.
//!
//! Only the fields the harness sends or inspects are modelled. Unknown
//! response fields are ignored.

mod account;
mod contribution;
mod event;
mod profile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use account::{AuthResponse, LOGIN_PATH, LoginUser, REGISTER_PATH, RegisterUser};
pub use contribution::{DONATIONS_PATH, Donation, FEEDBACK_PATH, Feedback};
pub use event::{EVENTS_PATH, Event, EventRegistration, first_open_event};
pub use profile::{PROFILE_PATH, ProfileUpdate, USER_SEARCH_PATH, UserSearchQuery};

/// API root path.
pub const ROOT_PATH: &str = "api/";
/// Dashboard statistics path.
pub const DASHBOARD_STATS_PATH: &str = "api/dashboard/stats";

/// Identifier of a server-side resource, sent as either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// String identifier, typically a UUID.
    Text(String),
    /// Numeric identifier.
    Number(i64),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}
