use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are a helpful and concise assistant. Answer in 1-2 short sentences only.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_message: String,
}

impl AppConfig {
    /// Read configuration from environment variables. The API key is
    /// required; everything else has a default. A missing key is a
    /// fatal startup condition so the server never serves traffic it
    /// can't complete.
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env::var("CHATRELAY_API_KEY").context("Missing env var CHATRELAY_API_KEY")?;
        let openai_api_hostname = env::var("CHATRELAY_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());
        let openai_model =
            env::var("CHATRELAY_MODEL").unwrap_or_else(|_| "llama3-8b-8192".to_string());
        let system_message = env::var("CHATRELAY_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());

        Ok(Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
        })
    }
}
