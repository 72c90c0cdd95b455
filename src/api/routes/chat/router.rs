//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::openai::{build_messages, chat};

type SharedState = Arc<RwLock<AppState>>;

/// Run one chat exchange: build the prompt from the system
/// instruction, the retained history slice, and the new message, then
/// call the completion API and return the sanitized reply
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatResponse>, crate::api::public::ApiError> {
    let (api_hostname, api_key, model, system_message) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let config = &shared_state.config;
        (
            config.openai_api_hostname.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.system_message.clone(),
        )
    };

    let messages = build_messages(&system_message, &payload.history, &payload.message);
    let response = chat(&messages, &api_hostname, &api_key, &model).await?;

    Ok(axum::Json(public::ChatResponse { response }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
