//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock the civic-information and Gmail APIs in
//! integration tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/representatives")
//!         .with_query("address", "90210")
//!         .respond_with_json(json!({"offices": [], "officials": []}))
//!         .mount()
//!         .await;
//!
//!     // Point the client at server.url()
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)`
//! - **Error response**: `.respond_with_status(500)` plus optional `.with_json_response(value)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

#![allow(dead_code)]

use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the running server (no trailing slash).
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server, for matchers this wrapper doesn't cover.
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.server, "GET", route)
    }

    pub fn expect_post(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.server, "POST", route)
    }

    /// Assert every mounted `expect_times` expectation was met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// JSON bodies of every request received so far.
    pub async fn received_json(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.body_json::<Value>().ok())
            .collect()
    }
}

pub struct StubBuilder<'a> {
    server: &'a MockServer,
    method: &'static str,
    route: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    status: u16,
    json: Option<Value>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a MockServer, method: &'static str, route: &str) -> Self {
        Self {
            server,
            method,
            route: route.to_string(),
            headers: Vec::new(),
            query: Vec::new(),
            status: 200,
            json: None,
            delay: None,
            times: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Respond 200 with a JSON body.
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.status = 200;
        self.json = Some(body);
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach a JSON body without changing the status.
    pub fn with_json_response(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut builder = Mock::given(method(self.method)).and(path(self.route.as_str()));
        for (name, value) in &self.headers {
            builder = builder.and(header(name.as_str(), value.as_str()));
        }
        for (name, value) in &self.query {
            builder = builder.and(query_param(name.as_str(), value.as_str()));
        }

        let mut template = ResponseTemplate::new(self.status);
        if let Some(body) = self.json {
            template = template.set_body_json(body);
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
