use super::core::{CompletionError, Message, Role, completion};
use super::sanitize::sanitize_reply;

/// Number of prior turns replayed as context for the next request
pub const CONTEXT_TURNS: usize = 3;

/// Build the outbound message sequence: the system instruction, the
/// most recent turns of history expanded into user/assistant message
/// pairs, then the new user message last. History pairs are
/// (question, answer) in chronological order; only the last
/// `CONTEXT_TURNS` are kept.
pub fn build_messages(
    system_message: &str,
    history: &[(String, String)],
    message: &str,
) -> Vec<Message> {
    let retained = &history[history.len().saturating_sub(CONTEXT_TURNS)..];

    let mut messages = Vec::with_capacity(retained.len() * 2 + 2);
    messages.push(Message::new(Role::System, system_message));
    for (question, answer) in retained {
        messages.push(Message::new(Role::User, question));
        messages.push(Message::new(Role::Assistant, answer));
    }
    messages.push(Message::new(Role::User, message));
    messages
}

/// Runs one chat exchange: pass the message sequence to the LLM and
/// return the sanitized reply text.
pub async fn chat(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, CompletionError> {
    let resp = completion(messages, api_hostname, api_key, model).await?;

    let raw = resp["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| CompletionError::Malformed(resp.to_string()))?;

    Ok(sanitize_reply(raw))
}
