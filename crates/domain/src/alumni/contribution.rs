//! Donation and feedback payloads

use serde::{Deserialize, Serialize};

/// Donation path.
pub const DONATIONS_PATH: &str = "api/donations";
/// Feedback path.
pub const FEEDBACK_PATH: &str = "api/feedback";

/// Body of `POST api/donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Donor name
    pub name: String,
    /// Donor email
    pub email: String,
    /// Donor phone
    pub phone: String,
    /// Amount in the platform currency
    pub amount: f64,
    /// What the donation is for
    pub purpose: String,
    /// Free-text note
    pub message: String,
}

/// Body of `POST api/feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Feedback text
    pub message: String,
}
