//! Common test utilities for in-process API testing with a mock source.
//!
//! The fixture builds the real router over an [`OrderPipeline`] whose source
//! is a [`MockTabularSource`], so tests control exactly which rows (or which
//! failure) the spreadsheet returns.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use boothtrack_core::{testing::MockTabularSource, Config, OrderPipeline, SheetRow, TabularSource};
use boothtrack_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use boothtrack_core::testing::fixtures;

/// Test fixture wrapping the router and its mock source.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock source - configure rows and failures
    pub source: MockTabularSource,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Fixture with a connected mock source that initially returns no rows.
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    /// Fixture with a connected mock source serving `rows`.
    pub async fn with_rows(rows: Vec<SheetRow>) -> Self {
        let fixture = Self::new().await;
        fixture.source.set_rows(rows).await;
        fixture
    }

    /// Fixture with a custom configuration.
    pub async fn with_config(config: Config) -> Self {
        let source = MockTabularSource::new();
        let pipeline = OrderPipeline::new(
            Some(Arc::new(source.clone()) as Arc<dyn TabularSource>),
            "test-sheet",
        );
        let state = Arc::new(AppState::new(config, Arc::new(pipeline)));

        Self {
            router: create_router(state),
            source,
        }
    }

    /// Fixture without any source: every request serves the synthetic orders.
    pub fn disconnected() -> Self {
        let state = Arc::new(AppState::new(
            Config::default(),
            Arc::new(OrderPipeline::synthetic_only()),
        ));

        Self {
            router: create_router(state),
            source: MockTabularSource::new(),
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::builder().method("GET").uri(path)).await
    }

    /// Send a GET request with an `Origin` header.
    pub async fn get_with_origin(&self, path: &str, origin: &str) -> (TestResponse, Option<String>) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header("Origin", origin)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        (Self::collect(response).await, allow_origin)
    }

    /// Send a request with an arbitrary method.
    pub async fn send(&self, method: &str, path: &str) -> TestResponse {
        self.request(Request::builder().method(method).uri(path)).await
    }

    async fn request(&self, builder: axum::http::request::Builder) -> TestResponse {
        let request = builder.body(Body::empty()).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        Self::collect(response).await
    }

    async fn collect(response: axum::response::Response) -> TestResponse {
        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}
