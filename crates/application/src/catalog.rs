//! Bodies of the catalog cases.
//!
//! Each case returns whether it reached its goal. Outcomes that matter to
//! the report are recorded through [`TestRunner::log`] or
//! [`TestRunner::run_test`]; the returned flag is only traced.

use alumni_probe_domain::alumni::{
    AuthResponse, DASHBOARD_STATS_PATH, DONATIONS_PATH, EVENTS_PATH, FEEDBACK_PATH, LOGIN_PATH,
    PROFILE_PATH, REGISTER_PATH, ROOT_PATH, UserSearchQuery, first_open_event,
};
use alumni_probe_domain::{RequestSpec, TestCase};
use tracing::{info, warn};

use crate::fixtures::{self, EXPECTED_EVENT_COUNT, SEARCH_TERM};
use crate::ports::{Clock, HttpClient, Reporter};
use crate::runner::TestRunner;

const EVENTS_COUNT_CHECK: &str = "Events Count Validation";

impl<C, K, R> TestRunner<C, K, R>
where
    C: HttpClient,
    K: Clock,
    R: Reporter,
{
    /// Runs a single catalog case.
    pub async fn run_case(&mut self, case: TestCase) -> bool {
        match case {
            TestCase::RootEndpoint => self.check_root_endpoint().await,
            TestCase::Registration => self.check_registration().await,
            TestCase::Login => self.check_login().await,
            TestCase::PhoneValidation => self.check_phone_validation().await,
            TestCase::DashboardStats => self.check_dashboard_stats().await,
            TestCase::Events => self.check_events().await,
            TestCase::UserProfile => self.check_user_profile().await,
            TestCase::ProfileUpdate => self.check_profile_update().await,
            TestCase::UserSearch => self.check_user_search().await,
            TestCase::EventRegistration => self.check_event_registration().await,
            TestCase::Donation => self.check_donation().await,
            TestCase::Feedback => self.check_feedback().await,
        }
    }

    async fn check_root_endpoint(&mut self) -> bool {
        self.run_test(&RequestSpec::get("Root API", ROOT_PATH, 200))
            .await
            .success
    }

    async fn check_registration(&mut self) -> bool {
        let user = fixtures::session_user(&self.unique_suffix());
        let outcome = self
            .run_with_json(RequestSpec::post("User Registration", REGISTER_PATH, 200), &user)
            .await;
        if !outcome.success {
            return false;
        }

        let auth = AuthResponse::from_body(&outcome.body);
        let Some(credential) = auth.credential() else {
            warn!("registration succeeded without issuing a token");
            return false;
        };
        info!(user_id = ?auth.user_id(), "session authenticated");
        self.session.authenticate(credential, auth.user_id());
        true
    }

    // Registers its own user so it never depends on, or changes, the session.
    async fn check_login(&mut self) -> bool {
        let user = fixtures::login_user(&self.unique_suffix());
        let registered = self
            .run_with_json(
                RequestSpec::post("Registration for Login Test", REGISTER_PATH, 200),
                &user,
            )
            .await;
        if !registered.success {
            return false;
        }

        let outcome = self
            .run_with_json(
                RequestSpec::post("User Login", LOGIN_PATH, 200),
                &fixtures::login_for(&user),
            )
            .await;
        let has_token = AuthResponse::from_body(&outcome.body).credential().is_some();
        if outcome.success && !has_token {
            warn!("login succeeded without issuing a token");
        }
        outcome.success && has_token
    }

    async fn check_phone_validation(&mut self) -> bool {
        let user = fixtures::invalid_phone_user(&self.unique_suffix());
        self.run_with_json(
            RequestSpec::post("Phone Validation (Invalid Format)", REGISTER_PATH, 422),
            &user,
        )
        .await
        .success
    }

    async fn check_dashboard_stats(&mut self) -> bool {
        self.run_test(&RequestSpec::get("Dashboard Stats", DASHBOARD_STATS_PATH, 200))
            .await
            .success
    }

    async fn check_events(&mut self) -> bool {
        let outcome = self
            .run_test(&RequestSpec::get("Get Events", EVENTS_PATH, 200))
            .await;
        if !outcome.success {
            return false;
        }

        match outcome.body.as_array().map(Vec::len) {
            Some(EXPECTED_EVENT_COUNT) => self.log(
                EVENTS_COUNT_CHECK,
                true,
                format!("Found {EXPECTED_EVENT_COUNT} events"),
            ),
            Some(count) => self.log(
                EVENTS_COUNT_CHECK,
                false,
                format!("Expected {EXPECTED_EVENT_COUNT} events, got {count}"),
            ),
            None => self.log(
                EVENTS_COUNT_CHECK,
                false,
                format!("Expected {EXPECTED_EVENT_COUNT} events, got invalid response"),
            ),
        }
        true
    }

    async fn check_user_profile(&mut self) -> bool {
        if !self.require_credential("User Profile") {
            return false;
        }
        self.run_test(&RequestSpec::get("Get User Profile", PROFILE_PATH, 200))
            .await
            .success
    }

    async fn check_profile_update(&mut self) -> bool {
        if !self.require_credential("Profile Update") {
            return false;
        }
        self.run_with_json(
            RequestSpec::put("Profile Update", PROFILE_PATH, 200),
            &fixtures::profile_update(),
        )
        .await
        .success
    }

    async fn check_user_search(&mut self) -> bool {
        const NAME: &str = "User Search";
        if !self.require_credential(NAME) {
            return false;
        }
        match UserSearchQuery::new(SEARCH_TERM).to_path() {
            Ok(path) => self.run_test(&RequestSpec::get(NAME, path, 200)).await.success,
            Err(error) => {
                self.log(NAME, false, format!("Exception: {error}"));
                false
            }
        }
    }

    async fn check_event_registration(&mut self) -> bool {
        const NAME: &str = "Event Registration";
        if !self.require_credential(NAME) {
            return false;
        }

        let listing = self
            .run_test(&RequestSpec::get("Get Events for Registration", EVENTS_PATH, 200))
            .await;
        if !listing.success || !listing.body.is_array() {
            return false;
        }

        let Some(event) = first_open_event(&listing.body) else {
            self.log(NAME, false, "No events with registration found");
            return false;
        };

        self.run_with_json(
            RequestSpec::post(NAME, event.registration_path(), 200),
            &fixtures::event_registration(),
        )
        .await
        .success
    }

    async fn check_donation(&mut self) -> bool {
        if !self.require_credential("Donation") {
            return false;
        }
        self.run_with_json(
            RequestSpec::post("Donation", DONATIONS_PATH, 200),
            &fixtures::donation(),
        )
        .await
        .success
    }

    async fn check_feedback(&mut self) -> bool {
        self.run_with_json(
            RequestSpec::post("Feedback Submission", FEEDBACK_PATH, 200),
            &fixtures::feedback(),
        )
        .await
        .success
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::test_support::{BASE, FixedClock, MockBackend, RecordingReporter, events};
    use alumni_probe_domain::{Credential, HttpMethod, TestResult};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type MockRunner = TestRunner<MockBackend, FixedClock, RecordingReporter>;

    fn runner(backend: MockBackend) -> MockRunner {
        TestRunner::new(
            RunnerConfig::new(BASE).unwrap(),
            backend,
            FixedClock::morning(),
            RecordingReporter::default(),
        )
    }

    fn authenticated(backend: MockBackend) -> MockRunner {
        let mut runner = runner(backend);
        runner
            .session
            .authenticate(Credential::new("session-token").unwrap(), None);
        runner
    }

    fn names(runner: &MockRunner) -> Vec<&str> {
        runner.results().iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_registration_captures_credential_and_subject() {
        let mut runner = runner(MockBackend::compliant());

        assert!(runner.run_case(TestCase::Registration).await);

        let session = runner.session();
        assert_eq!(session.credential().unwrap().as_str(), "session-token");
        assert_eq!(session.subject_id(), Some("user-1"));

        let requests = runner.client().requests();
        let request = &requests[0];
        assert_eq!(request.url, format!("{BASE}/api/auth/register"));
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["email"], json!("test_user_093015@test.com"));
        assert_eq!(body["phone"], json!("(555) 123-4567"));
    }

    #[tokio::test]
    async fn test_registration_without_token_leaves_session_anonymous() {
        let mut runner = runner(MockBackend::new().reply(
            HttpMethod::Post,
            "api/auth/register",
            200,
            json!({ "message": "ok" }),
        ));

        assert!(!runner.run_case(TestCase::Registration).await);
        assert!(!runner.session().is_authenticated());
        assert_eq!(runner.summary().passed, 1);
    }

    #[tokio::test]
    async fn test_registration_keeps_token_when_user_has_no_id() {
        let backend = MockBackend::compliant().reply(
            HttpMethod::Post,
            "api/auth/register",
            200,
            json!({ "token": "session-token", "user": { "email": "x@test.com" } }),
        );
        let mut runner = runner(backend);

        assert!(runner.run_case(TestCase::Registration).await);
        assert_eq!(runner.session().subject_id(), None);

        assert!(runner.run_case(TestCase::UserProfile).await);
        let requests = runner.client().requests();
        assert_eq!(
            requests[1].headers.get("Authorization"),
            Some("Bearer session-token")
        );
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_session_anonymous() {
        let mut runner = runner(MockBackend::new().reply(
            HttpMethod::Post,
            "api/auth/register",
            400,
            json!({ "detail": "Email already registered" }),
        ));

        assert!(!runner.run_case(TestCase::Registration).await);
        assert!(!runner.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_is_independent_of_session() {
        let mut runner = runner(MockBackend::compliant());

        assert!(runner.run_case(TestCase::Login).await);

        assert_eq!(names(&runner), vec!["Registration for Login Test", "User Login"]);
        assert!(!runner.session().is_authenticated());

        let requests = runner.client().requests();
        let login = requests[1].body.as_ref().unwrap();
        assert_eq!(
            login,
            &json!({ "email": "login_test_093015@test.com", "password": "LoginTest123!" })
        );
    }

    #[tokio::test]
    async fn test_login_skipped_when_its_registration_fails() {
        let mut runner = runner(MockBackend::new().reply(
            HttpMethod::Post,
            "api/auth/register",
            500,
            json!({}),
        ));

        assert!(!runner.run_case(TestCase::Login).await);
        assert_eq!(names(&runner), vec!["Registration for Login Test"]);
        assert_eq!(runner.client().request_count(), 1);
    }

    #[tokio::test]
    async fn test_login_without_token_is_not_reached() {
        let backend = MockBackend::compliant().reply(
            HttpMethod::Post,
            "api/auth/login",
            200,
            json!({ "user": { "id": "user-2" } }),
        );
        let mut runner = runner(backend);

        assert!(!runner.run_case(TestCase::Login).await);
        assert_eq!(runner.summary().failed, 0);
    }

    #[tokio::test]
    async fn test_phone_validation_passes_on_rejection() {
        let mut runner = runner(MockBackend::compliant());

        assert!(runner.run_case(TestCase::PhoneValidation).await);

        let body = runner.client().requests()[0].body.clone().unwrap();
        assert_eq!(body["phone"], json!("555-123-4567"));
        assert_eq!(body["email"], json!("invalid_phone_093015@test.com"));
        assert_eq!(
            runner.results()[0],
            TestResult::pass("Phone Validation (Invalid Format)", "Status: 422")
        );
    }

    #[tokio::test]
    async fn test_phone_validation_fails_when_accepted() {
        let mut runner = runner(MockBackend::new().reply(
            HttpMethod::Post,
            "api/auth/register",
            200,
            json!({ "token": "t" }),
        ));

        assert!(!runner.run_case(TestCase::PhoneValidation).await);
        assert!(!runner.results()[0].success);
        assert!(runner.results()[0].details.starts_with("Status: 200"));
        assert!(!runner.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_events_count_validation_passes_with_ten() {
        let mut runner = runner(MockBackend::compliant());

        assert!(runner.run_case(TestCase::Events).await);
        assert_eq!(
            runner.results()[1],
            TestResult::pass("Events Count Validation", "Found 10 events")
        );
    }

    #[tokio::test]
    async fn test_events_count_validation_fails_with_five() {
        let backend =
            MockBackend::compliant().reply(HttpMethod::Get, "api/events", 200, events(5));
        let mut runner = runner(backend);

        assert!(runner.run_case(TestCase::Events).await);
        assert!(runner.results()[0].success);
        assert_eq!(
            runner.results()[1],
            TestResult::fail("Events Count Validation", "Expected 10 events, got 5")
        );
    }

    #[tokio::test]
    async fn test_events_count_validation_on_non_array() {
        let backend = MockBackend::new().reply(
            HttpMethod::Get,
            "api/events",
            200,
            json!({ "events": [] }),
        );
        let mut runner = runner(backend);

        runner.run_case(TestCase::Events).await;
        assert_eq!(
            runner.results()[1].details,
            "Expected 10 events, got invalid response"
        );
    }

    #[tokio::test]
    async fn test_events_count_not_checked_when_listing_fails() {
        let backend = MockBackend::new().reply(HttpMethod::Get, "api/events", 503, json!({}));
        let mut runner = runner(backend);

        assert!(!runner.run_case(TestCase::Events).await);
        assert_eq!(names(&runner), vec!["Get Events"]);
    }

    #[tokio::test]
    async fn test_dependent_cases_skip_network_without_credential() {
        let mut runner = runner(MockBackend::compliant());

        for case in TestCase::ALL.into_iter().filter(|c| c.requires_credential()) {
            assert!(!runner.run_case(case).await, "{case} should fail");
        }

        assert_eq!(runner.client().request_count(), 0);
        assert_eq!(
            names(&runner),
            vec![
                "User Profile",
                "Profile Update",
                "User Search",
                "Event Registration",
                "Donation"
            ]
        );
        assert!(
            runner
                .results()
                .iter()
                .all(|r| !r.success && r.details == "No authentication token")
        );
    }

    #[tokio::test]
    async fn test_authenticated_cases_hit_their_endpoints() {
        let mut runner = authenticated(MockBackend::compliant());

        assert!(runner.run_case(TestCase::UserProfile).await);
        assert!(runner.run_case(TestCase::ProfileUpdate).await);
        assert!(runner.run_case(TestCase::UserSearch).await);
        assert!(runner.run_case(TestCase::Donation).await);

        let calls: Vec<_> = runner
            .client()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            calls,
            vec![
                (HttpMethod::Get, format!("{BASE}/api/user/profile")),
                (HttpMethod::Put, format!("{BASE}/api/user/profile")),
                (HttpMethod::Get, format!("{BASE}/api/users/search?q=test")),
                (HttpMethod::Post, format!("{BASE}/api/donations")),
            ]
        );
        assert_eq!(
            names(&runner),
            vec!["Get User Profile", "Profile Update", "User Search", "Donation"]
        );
    }

    #[tokio::test]
    async fn test_event_registration_targets_first_open_event() {
        let mut runner = authenticated(MockBackend::compliant());

        assert!(runner.run_case(TestCase::EventRegistration).await);

        let requests = runner.client().requests();
        assert_eq!(requests[1].url, format!("{BASE}/api/events/evt-3/register"));
        assert_eq!(
            requests[1].body.as_ref().unwrap()["email"],
            json!("test_reg@test.com")
        );
        assert_eq!(
            names(&runner),
            vec!["Get Events for Registration", "Event Registration"]
        );
    }

    #[tokio::test]
    async fn test_event_registration_without_open_event() {
        let backend = MockBackend::compliant().reply(
            HttpMethod::Get,
            "api/events",
            200,
            json!([{ "id": "evt-0", "has_registration": false }]),
        );
        let mut runner = authenticated(backend);

        assert!(!runner.run_case(TestCase::EventRegistration).await);
        assert_eq!(runner.client().request_count(), 1);
        assert_eq!(
            runner.results()[1],
            TestResult::fail("Event Registration", "No events with registration found")
        );
    }

    #[tokio::test]
    async fn test_event_registration_stops_when_listing_is_not_an_array() {
        let backend =
            MockBackend::new().reply(HttpMethod::Get, "api/events", 200, json!({ "items": [] }));
        let mut runner = authenticated(backend);

        assert!(!runner.run_case(TestCase::EventRegistration).await);
        assert_eq!(names(&runner), vec!["Get Events for Registration"]);
    }

    #[tokio::test]
    async fn test_feedback_needs_no_credential() {
        let mut runner = runner(MockBackend::compliant());

        assert!(runner.run_case(TestCase::Feedback).await);
        let requests = runner.client().requests();
        let request = &requests[0];
        assert_eq!(request.headers.get("Authorization"), None);
        assert_eq!(
            request.body.as_ref().unwrap()["message"],
            json!("This is a test feedback message for the alumni network platform.")
        );
    }
}
