use std::env;
use std::path::Path;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::api::public::chat::{ChatRequest, ChatResponse};
use crate::chat::SessionHistory;
use crate::chat::export;

/// Send one message plus the retained context slice to the proxy.
/// Failures are folded into the returned string so they show up in
/// the transcript instead of ending the session.
async fn send_message(
    client: &reqwest::Client,
    chat_url: &str,
    message: &str,
    history: &SessionHistory,
) -> String {
    let payload = ChatRequest {
        message: message.to_string(),
        history: history.context_window(),
    };

    match client.post(chat_url).json(&payload).send().await {
        Ok(resp) if resp.status().is_success() => match resp.json::<ChatResponse>().await {
            Ok(body) => body.response,
            Err(err) => format!("Error: {}", err),
        },
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            format!("Error: {} - {}", status, body)
        }
        Err(err) => format!("Error: {}", err),
    }
}

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let proxy_url =
        env::var("CHATRELAY_PROXY_URL").unwrap_or_else(|_| "http://127.0.0.1:2222".to_string());
    let chat_url = format!("{}/chat/", proxy_url.trim_end_matches("/"));

    let client = reqwest::Client::new();
    let mut history = SessionHistory::new();

    println!("Chatting with {} (:save to export, :quit to exit)", proxy_url);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == ":quit" {
                    break;
                }
                if line == ":save" {
                    if history.is_empty() {
                        println!("Nothing to save yet.");
                        continue;
                    }
                    let path = export::write_transcript(&history, Path::new("."))?;
                    println!("Saved conversation to {}", path.display());
                    continue;
                }

                let answer = send_message(&client, &chat_url, line, &history).await;
                println!("    {}", answer);
                history.record(line, &answer);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
