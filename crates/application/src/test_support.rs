//! In-memory backend, clock and reporter shared by the unit tests.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Mutex;

use alumni_probe_domain::{HttpMethod, ResponseSpec, RunSummary, TestResult};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use crate::ports::{Clock, HttpClient, HttpClientError, HttpRequest, Reporter};

pub const BASE: &str = "http://backend.test";

type Handler = Box<dyn Fn(&HttpRequest) -> Result<ResponseSpec, HttpClientError> + Send + Sync>;

struct Route {
    method: HttpMethod,
    url: String,
    handler: Handler,
}

/// Routes requests by method and exact URL and records everything it receives.
/// Unrouted requests get a 404.
pub struct MockBackend {
    routes: Vec<Route>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend that answers every case the way a healthy server would.
    pub fn compliant() -> Self {
        Self::new()
            .reply(HttpMethod::Get, "api/", 200, json!({ "message": "Alumni Network API" }))
            .route(HttpMethod::Post, "api/auth/register", |request| {
                let phone = request
                    .body
                    .as_ref()
                    .and_then(|b| b.get("phone"))
                    .and_then(Value::as_str);
                if phone == Some("555-123-4567") {
                    return Ok(ResponseSpec::json(
                        422,
                        &json!({ "detail": "Phone must be (XXX) XXX-XXXX" }),
                    ));
                }
                Ok(ResponseSpec::json(
                    200,
                    &json!({ "token": "session-token", "user": { "id": "user-1" } }),
                ))
            })
            .reply(
                HttpMethod::Post,
                "api/auth/login",
                200,
                json!({ "token": "login-token", "user": { "id": "user-2" } }),
            )
            .reply(HttpMethod::Get, "api/dashboard/stats", 200, json!({ "total_alumni": 3 }))
            .reply(HttpMethod::Get, "api/events", 200, events(10))
            .reply(HttpMethod::Get, "api/user/profile", 200, json!({ "id": "user-1" }))
            .reply(HttpMethod::Put, "api/user/profile", 200, json!({ "id": "user-1" }))
            .reply(HttpMethod::Get, "api/users/search?q=test", 200, json!([]))
            .reply(HttpMethod::Post, "api/events/evt-3/register", 200, json!({ "ok": true }))
            .reply(HttpMethod::Post, "api/donations", 200, json!({ "id": "don-1" }))
            .reply(HttpMethod::Post, "api/feedback", 200, json!({ "id": "fb-1" }))
    }

    /// Adds a route; later routes win over earlier ones for the same request.
    pub fn route(
        mut self,
        method: HttpMethod,
        path: &str,
        handler: impl Fn(&HttpRequest) -> Result<ResponseSpec, HttpClientError> + Send + Sync + 'static,
    ) -> Self {
        self.routes.push(Route {
            method,
            url: format!("{BASE}/{path}"),
            handler: Box::new(handler),
        });
        self
    }

    pub fn reply(self, method: HttpMethod, path: &str, status: u16, body: Value) -> Self {
        self.route(method, path, move |_| Ok(ResponseSpec::json(status, &body)))
    }

    pub fn fail(self, method: HttpMethod, path: &str, error: HttpClientError) -> Self {
        self.route(method, path, move |_| Err(error.clone()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for MockBackend {
    async fn execute(&self, request: &HttpRequest) -> Result<ResponseSpec, HttpClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.routes
            .iter()
            .rev()
            .find(|r| r.method == request.method && r.url == request.url)
            .map_or_else(
                || Ok(ResponseSpec::json(404, &json!({ "detail": "Not Found" }))),
                |r| (r.handler)(request),
            )
    }
}

/// Event listing with `count` entries; only `evt-3` accepts registrations.
pub fn events(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({ "id": format!("evt-{i}"), "has_registration": i == 3 }))
            .collect(),
    )
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 09:30:15 UTC.
    pub fn morning() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 15).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub titles: Vec<String>,
    pub results: Vec<TestResult>,
    pub summary: Option<RunSummary>,
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn result_recorded(&mut self, result: &TestResult) {
        self.results.push(result.clone());
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        self.summary = Some(*summary);
    }
}
