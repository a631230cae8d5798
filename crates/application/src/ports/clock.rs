//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Fixture emails are suffixed with the current time as `HHMMSS`, so tests
/// pin it with a fixed implementation. The suffix is taken in UTC rather
/// than local time; it only has to differ between runs.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
