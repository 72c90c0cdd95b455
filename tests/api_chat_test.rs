//! Integration tests for the chat API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    fn completion_body(content: &str) -> String {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1694268190,
            "model": "test-model",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    fn chat_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri("/chat/")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Tests the liveness check at the root route
    #[tokio::test]
    async fn it_reports_liveness_at_root() {
        // Upstream is never called
        let app = test_app("http://127.0.0.1:1");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"message\""));
        assert!(body.contains("running"));
    }

    /// Tests a chat exchange with no history returns the sanitized reply
    #[tokio::test]
    async fn it_returns_sanitized_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Hello! How can I help? Human: and also"))
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(chat_request(json!({"message": "Hi", "history": []})))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, r#"{"response":"Hello! How can I help?"}"#);
    }

    /// Tests the chat route also matches without the trailing slash
    #[tokio::test]
    async fn it_accepts_chat_route_without_trailing_slash() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Hi there."))
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/chat")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"message": "Hi"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests that exactly the last 3 turns of a 5-turn history are
    /// forwarded upstream, chronologically, followed by the new message
    #[tokio::test]
    async fn it_forwards_last_three_turns_chronologically() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(mockito::Matcher::PartialJson(json!({
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a helpful and concise assistant. Answer in 1-2 short sentences only."
                    },
                    {"role": "user", "content": "q3"},
                    {"role": "assistant", "content": "a3"},
                    {"role": "user", "content": "q4"},
                    {"role": "assistant", "content": "a4"},
                    {"role": "user", "content": "q5"},
                    {"role": "assistant", "content": "a5"},
                    {"role": "user", "content": "next"},
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Noted."))
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(chat_request(json!({
                "message": "next",
                "history": [
                    ["q1", "a1"],
                    ["q2", "a2"],
                    ["q3", "a3"],
                    ["q4", "a4"],
                    ["q5", "a5"],
                ]
            })))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests an upstream API error surfaces as a 500 with a detail string
    #[tokio::test]
    async fn it_returns_500_with_detail_on_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "model overloaded", "type": "server_error"}}"#)
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(chat_request(json!({"message": "Hi"})))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"detail\""));
        assert!(body.contains("model overloaded"));
    }

    /// Tests a response without a message content surfaces as a 500
    #[tokio::test]
    async fn it_returns_500_on_malformed_upstream_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(chat_request(json!({"message": "Hi"})))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("malformed completion response"));
    }

    /// Tests the history field is optional
    #[tokio::test]
    async fn it_accepts_request_without_history() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Hello."))
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(chat_request(json!({"message": "Hi"})))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests chat POST rejects a body missing the message field
    #[tokio::test]
    async fn it_rejects_request_without_message() {
        let app = test_app("http://127.0.0.1:1");

        let response = app
            .oneshot(chat_request(json!({"history": []})))
            .await
            .unwrap();

        // Missing required field should return 422 (validation error)
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
