//! System clock adapter

use alumni_probe_application::ports::Clock;
use chrono::{DateTime, Utc};

/// Wall clock in UTC, independent of the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first.timestamp() > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_system_clock_reports_utc() {
        let now = SystemClock::new().now();
        assert_eq!(now.offset(), &Utc);
        assert_eq!(now.naive_utc(), now.naive_local());
    }
}
