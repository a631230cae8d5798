//! Test runner: executes checked API calls and records their outcomes.

use alumni_probe_domain::{
    RequestSpec, RunSummary, TestCase, TestLog, TestResult, empty_object,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RunnerConfig;
use crate::ports::{Clock, HttpClient, Reporter};
use crate::session::Session;

/// Title printed at the top of a run.
pub const RUN_TITLE: &str = "Starting Global Horizon Alumni Network API Tests";

/// Raw-body characters quoted in mismatch details when the body isn't JSON.
const BODY_PREVIEW_CHARS: usize = 200;

/// Result of one executed call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOutcome {
    /// Whether the status matched the expectation.
    pub success: bool,
    /// Parsed response body on success, an empty object otherwise.
    pub body: Value,
}

impl CallOutcome {
    fn passed(body: Value) -> Self {
        Self {
            success: true,
            body,
        }
    }

    fn failed() -> Self {
        Self {
            success: false,
            body: empty_object(),
        }
    }
}

/// Sequential harness over the alumni API.
///
/// Owns the session, the result log and the ports. Every call and every
/// precondition failure is recorded exactly once, and no failure ever
/// stops the run.
pub struct TestRunner<C, K, R> {
    client: C,
    clock: K,
    reporter: R,
    pub(crate) session: Session,
    history: TestLog,
}

impl<C, K, R> TestRunner<C, K, R>
where
    C: HttpClient,
    K: Clock,
    R: Reporter,
{
    /// Creates a runner with an unauthenticated session.
    pub fn new(config: RunnerConfig, client: C, clock: K, reporter: R) -> Self {
        Self {
            client,
            clock,
            reporter,
            session: Session::new(config.base_url),
            history: TestLog::new(),
        }
    }

    /// Runs the whole catalog in its fixed order and returns the summary.
    pub async fn run_all(&mut self) -> RunSummary {
        info!(
            base_url = %self.session.base_url(),
            cases = TestCase::ALL.len(),
            "starting run"
        );
        self.reporter.run_started(RUN_TITLE);

        for case in TestCase::ALL {
            let passed = self.run_case(case).await;
            debug!(case = %case, passed, "case finished");
        }

        let summary = self.history.summary();
        self.reporter.run_finished(&summary);
        info!(
            passed = summary.passed,
            total = summary.total,
            "run finished"
        );
        summary
    }

    /// Executes one checked call and records its outcome.
    ///
    /// Passes when the response status equals `expected_status`. Mismatches
    /// and transport failures are recorded as failures, never returned as
    /// errors.
    pub async fn run_test(&mut self, request: &RequestSpec) -> CallOutcome {
        let outgoing = self.session.prepare(request);
        debug!(method = %outgoing.method, url = %outgoing.url, "sending request");

        match self.client.execute(&outgoing).await {
            Ok(response) => {
                debug!(status = response.status, url = %outgoing.url, "received response");
                let success = response.status == request.expected_status;
                let mut details = format!("Status: {}", response.status);

                if success {
                    self.log(&request.name, true, details);
                    return CallOutcome::passed(response.json_or_empty());
                }

                match response.body_as_json() {
                    Some(json) => details = format!("{details}, Response: {json}"),
                    None => {
                        details = format!(
                            "{details}, Response: {}",
                            response.body_preview(BODY_PREVIEW_CHARS)
                        );
                    }
                }
                self.log(&request.name, false, details);
                CallOutcome::failed()
            }
            Err(error) => {
                warn!(url = %outgoing.url, %error, "request failed");
                self.log(&request.name, false, format!("Exception: {error}"));
                CallOutcome::failed()
            }
        }
    }

    /// Attaches `body` to `request` and executes it.
    ///
    /// A body that cannot be serialized is recorded as a failure of the call.
    pub(crate) async fn run_with_json<T: Serialize>(
        &mut self,
        request: RequestSpec,
        body: &T,
    ) -> CallOutcome {
        let name = request.name.clone();
        match request.with_json(body) {
            Ok(request) => self.run_test(&request).await,
            Err(error) => {
                self.log(&name, false, format!("Exception: {error}"));
                CallOutcome::failed()
            }
        }
    }

    /// Records a result and reports it immediately.
    pub fn log(&mut self, name: &str, success: bool, details: impl Into<String>) {
        let result = if success {
            TestResult::pass(name, details)
        } else {
            TestResult::fail(name, details)
        };
        let recorded = self.history.record(result);
        self.reporter.result_recorded(recorded);
    }

    /// Records a precondition failure unless a credential is held.
    pub(crate) fn require_credential(&mut self, name: &str) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        self.log(name, false, "No authentication token");
        false
    }

    /// `HHMMSS` of the current time, used to make fixture emails unique.
    pub(crate) fn unique_suffix(&self) -> String {
        self.clock.now().format("%H%M%S").to_string()
    }

    /// Results recorded so far, in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        self.history.results()
    }

    /// Counters of the results recorded so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.history.summary()
    }

    /// The session shared across cases.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The HTTP transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// The reporter.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }
}
