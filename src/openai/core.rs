use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Sampling temperature for every completion request
const TEMPERATURE: f64 = 0.7;

/// Cap on generated output tokens
const MAX_TOKENS: u32 = 100;

/// Stop sequences that truncate hallucinated dialogue continuations
/// at generation time. Anything that slips through is handled by
/// `sanitize_reply`.
const STOP_SEQUENCES: [&str; 2] = ["Human:", "AI:"];

/// Bound on the outbound call so a hung upstream can't stall the
/// request forever
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Failure modes of the upstream exchange. Configuration problems are
/// caught at startup by `AppConfig::from_env` so they never show up
/// here.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("completion API returned an error: {0}")]
    Upstream(String),
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Call the OpenAI-compatible chat completion API with the given
/// message sequence and return the parsed response body.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": TEMPERATURE,
        "max_tokens": MAX_TOKENS,
        "stop": STOP_SEQUENCES,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response: Value = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(UPSTREAM_TIMEOUT)
        .json(&payload)
        .send()
        .await?
        .json()
        .await?;

    // API-reported errors come back as a JSON body with an `error`
    // object regardless of HTTP status
    if let Some(err) = response.get("error") {
        let detail = err
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(CompletionError::Upstream(detail));
    }

    Ok(response)
}
