//! Public types for the chat API
use serde::{Deserialize, Serialize};

/// Request for one chat exchange. History pairs are
/// (question, answer) in chronological order; only the most recent
/// turns are used as context for the completion.
#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<(String, String)>,
}

/// The sanitized reply for one exchange
#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
