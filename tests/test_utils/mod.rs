//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::Router;
use axum::body::Body;
use tower_http::normalize_path::NormalizePath;

use chatrelay::api::AppState;
use chatrelay::api::app;
use chatrelay::core::AppConfig;
use chatrelay::core::config::DEFAULT_SYSTEM_MESSAGE;

/// Creates a test application router pointed at the given upstream
/// completion API hostname (usually a `mockito` server URL).
pub fn test_app(upstream_hostname: &str) -> NormalizePath<Router> {
    let config = AppConfig {
        openai_api_hostname: upstream_hostname.to_string(),
        openai_api_key: "test-key".to_string(),
        openai_model: "test-model".to_string(),
        system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
    };
    let state = Arc::new(RwLock::new(AppState::new(config)));
    app(state)
}

/// Collect a response body into a string
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid UTF-8")
}
