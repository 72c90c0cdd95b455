//! Router for the status API

use std::sync::{Arc, RwLock};

use axum::{Router, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Liveness check, also useful for verifying a deployment
async fn status() -> axum::Json<public::StatusResponse> {
    axum::Json(public::StatusResponse {
        message: "chatrelay is running. Use POST /chat/ to interact with the chatbot.".to_string(),
    })
}

/// Create the status router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(status))
}
