//! Event listing and registration payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ResourceId;

/// Event listing path.
pub const EVENTS_PATH: &str = "api/events";

/// An entry of the event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event id
    pub id: ResourceId,
    /// Whether the event accepts registrations
    #[serde(default, deserialize_with = "truthy")]
    pub has_registration: bool,
}

/// Reads a flag the way a loosely typed client would: `null`, `false`, `0`,
/// `""`, `[]` and `{}` are false, everything else is true.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    })
}

impl Event {
    /// Path of the registration endpoint for this event.
    #[must_use]
    pub fn registration_path(&self) -> String {
        format!("{EVENTS_PATH}/{}/register", self.id)
    }
}

/// Body of `POST api/events/{id}/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistration {
    /// Attendee name
    pub name: String,
    /// Attendee email
    pub email: String,
    /// Attendee phone
    pub phone: String,
    /// Whether the attendee joins the dinner
    pub attend_dinner: bool,
}

/// Finds the first listed event that accepts registrations.
///
/// Returns `None` if `listing` is not an array. Entries that don't look
/// like events are skipped.
#[must_use]
pub fn first_open_event(listing: &Value) -> Option<Event> {
    listing
        .as_array()?
        .iter()
        .filter_map(|entry| serde_json::from_value::<Event>(entry.clone()).ok())
        .find(|event| event.has_registration)
}
