//! Public types for the status API
use serde::{Deserialize, Serialize};

/// Liveness check response
#[derive(Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}
