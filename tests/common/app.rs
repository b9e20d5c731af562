//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use swatchlab::models::AppConfig;
use swatchlab::server::{build_router, create_app_state, AppState};
use swatchlab::services::{AnalysisService, InMemoryReviewStore};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub analysis: Arc<AnalysisService>,
    pub reviews: Arc<InMemoryReviewStore>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        // Create application state using shared server module
        let state = create_app_state(config);

        // Keep references for test assertions
        let analysis = state.analysis.clone();
        let reviews = state.reviews.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            analysis,
            reviews,
        }
    }

    /// Create a test app and return the state for custom router configuration
    pub fn create_state() -> AppState {
        create_app_state(AppConfig::default())
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Mark a warning as reviewed and assert it was accepted
    pub async fn review(&self, palette_id: &str, key: &str) {
        let response = self
            .post_json(
                &format!("/api/palettes/{palette_id}/reviews"),
                &serde_json::json!({ "key": key }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
