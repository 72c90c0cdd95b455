//! API routes module

pub mod chat;
pub mod status;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Liveness check
        .merge(status::router())
        // Chat routes
        .nest("/chat", chat::router())
}
