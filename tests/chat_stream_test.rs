//! End-to-end chat streaming tests against a mock HTTP server.

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use medivibe::chat::{ChatClient, CHAT_PATH};
use medivibe::error::{NetworkError, StreamError, VibeError};
use medivibe::models::{ChatMessage, ChatRequest};

fn sse_chunk(content: &str) -> String {
    format!(
        "data: {{\"choices\":[{{\"delta\":{{\"content\":\"{}\"}}}}]}}\n\n",
        content
    )
}

#[tokio::test]
async fn streams_full_reply() {
    let server = MockServer::start().await;
    let body = format!(
        "{}{}{}data: [DONE]\n\n",
        sse_chunk("Drink "),
        sse_chunk("plenty of "),
        sse_chunk("water.")
    );
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let request = ChatRequest::health(vec![ChatMessage::user("hydration tips?")]);

    let mut updates = Vec::new();
    let content = client
        .stream_chat(&request, |c| updates.push(c.to_string()))
        .await
        .unwrap();

    assert_eq!(content, "Drink plenty of water.");
    assert_eq!(updates.len(), 3);
    assert_eq!(updates.last().unwrap(), "Drink plenty of water.");
}

#[tokio::test]
async fn sends_expected_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "text/event-stream"))
        .and(body_partial_json(serde_json::json!({
            "type": "meal",
            "messages": [{"role": "user", "content": "dinner ideas"}]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("data: [DONE]\n\n", "text/event-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let request = ChatRequest::meal(vec![ChatMessage::user("dinner ideas")]);
    let content = client.stream_chat(&request, |_| {}).await.unwrap();
    assert_eq!(content, "");
}

#[tokio::test]
async fn keep_alive_comments_are_ignored() {
    let server = MockServer::start().await;
    let body = format!(
        ": keep-alive\n\n{}: keep-alive\n\ndata: [DONE]\n\n",
        sse_chunk("ok")
    );
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let content = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap();
    assert_eq!(content, "ok");
}

#[tokio::test]
async fn content_after_done_is_ignored() {
    let server = MockServer::start().await;
    let body = format!("{}data: [DONE]\n\n{}", sse_chunk("before"), sse_chunk("after"));
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let content = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap();
    assert_eq!(content, "before");
}

#[tokio::test]
async fn rate_limit_maps_to_retryable_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "20"))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let err = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(err.error_code(), "E_NET_RATE");
    assert!(matches!(
        err.inner(),
        VibeError::Network(NetworkError::RateLimited {
            retry_after_secs: Some(20)
        })
    ));
}

#[tokio::test]
async fn payment_required_maps_to_quota_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let err = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap_err();

    assert!(!err.is_retryable());
    assert!(matches!(
        err.inner(),
        VibeError::Network(NetworkError::QuotaExhausted)
    ));
    assert!(err.user_message().contains("credits"));
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let err = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(
        err.inner(),
        VibeError::Network(NetworkError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn malformed_stream_fails_with_payload_error() {
    let server = MockServer::start().await;
    // A complete but unparseable payload line that never becomes valid.
    let body = "data: {definitely not json\n\ndata: [DONE]\n\n".to_string();
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = ChatClient::with_base_url(server.uri());
    let err = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(
        err.inner(),
        VibeError::Stream(StreamError::MalformedPayload { .. })
    ));
}

#[tokio::test]
async fn connection_refused_maps_to_network_error() {
    let client = ChatClient::with_base_url("http://127.0.0.1:59999");
    let err = client
        .stream_chat(&ChatRequest::health(vec![]), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err.inner(), VibeError::Network(_)));
}
