//! Test outcomes and the fixed case catalog.
//!
//! [`TestLog`] is the append-only record of a run. It keeps the counters
//! and the ordered history consistent: every record bumps `tests_run`,
//! passing records also bump `tests_passed`, and nothing is ever removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one recorded check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Name the check was recorded under.
    pub name: String,
    /// Whether the check passed.
    pub success: bool,
    /// Status or failure details, possibly empty.
    pub details: String,
}

impl TestResult {
    /// Creates a passed result.
    #[must_use]
    pub fn pass(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: true,
            details: details.into(),
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            details: details.into(),
        }
    }
}

/// Ordered history of results plus run counters.
#[derive(Debug, Clone, Default)]
pub struct TestLog {
    results: Vec<TestResult>,
    tests_passed: usize,
}

impl TestLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
            tests_passed: 0,
        }
    }

    /// Appends a result and returns a reference to the stored entry.
    pub fn record(&mut self, result: TestResult) -> &TestResult {
        if result.success {
            self.tests_passed += 1;
        }
        self.results.push(result);
        &self.results[self.results.len() - 1]
    }

    /// Number of results recorded so far.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn tests_run(&self) -> usize {
        self.results.len()
    }

    /// Number of passing results recorded so far.
    #[must_use]
    pub const fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Results in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Summarizes the log.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.tests_run(), self.tests_passed)
    }
}

/// Aggregate counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Results recorded.
    pub total: usize,
    /// Results that passed.
    pub passed: usize,
    /// Results that failed.
    pub failed: usize,
}

impl RunSummary {
    /// Builds a summary from totals. `passed` is clamped to `total`.
    #[must_use]
    pub const fn new(total: usize, passed: usize) -> Self {
        let passed = if passed > total { total } else { passed };
        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Check if all recorded results passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run: 0 when everything passed, else 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}

/// The fixed catalog of API checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCase {
    /// `GET api/`
    RootEndpoint,
    /// Registers the session user and captures the credential.
    Registration,
    /// Registers a throwaway user and logs in with it.
    Login,
    /// Registration with a malformed phone must be rejected with 422.
    PhoneValidation,
    /// `GET api/dashboard/stats`
    DashboardStats,
    /// `GET api/events` plus the event count check.
    Events,
    /// `GET api/user/profile`
    UserProfile,
    /// `PUT api/user/profile`
    ProfileUpdate,
    /// `GET api/users/search`
    UserSearch,
    /// Registers for the first event that accepts registrations.
    EventRegistration,
    /// `POST api/donations`
    Donation,
    /// `POST api/feedback`
    Feedback,
}

impl TestCase {
    /// Every case, in the order a run executes them.
    ///
    /// Registration precedes every case that needs the credential.
    pub const ALL: [Self; 12] = [
        Self::RootEndpoint,
        Self::Registration,
        Self::Login,
        Self::PhoneValidation,
        Self::DashboardStats,
        Self::Events,
        Self::UserProfile,
        Self::ProfileUpdate,
        Self::UserSearch,
        Self::EventRegistration,
        Self::Donation,
        Self::Feedback,
    ];

    /// Human-readable case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RootEndpoint => "Root endpoint",
            Self::Registration => "Registration",
            Self::Login => "Login",
            Self::PhoneValidation => "Phone validation",
            Self::DashboardStats => "Dashboard stats",
            Self::Events => "Get events",
            Self::UserProfile => "User profile",
            Self::ProfileUpdate => "Profile update",
            Self::UserSearch => "User search",
            Self::EventRegistration => "Event registration",
            Self::Donation => "Donation",
            Self::Feedback => "Feedback",
        }
    }

    /// Whether the case needs the credential captured by registration.
    #[must_use]
    pub const fn requires_credential(self) -> bool {
        matches!(
            self,
            Self::UserProfile
                | Self::ProfileUpdate
                | Self::UserSearch
                | Self::EventRegistration
                | Self::Donation
        )
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
