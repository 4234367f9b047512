//! Client for the streaming health-chat endpoint.
//!
//! Sends a conversation to the backend and reads the assistant's reply
//! incrementally, reporting the running content to a caller-supplied sink as
//! each delta arrives.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::{
    classify_status, ErrorContext, NetworkError, ResultExt, StreamError, VibeError, VibeResult,
};
use crate::models::{AssistantKind, ChatRequest, Conversation};
use crate::sse::{ChunkProgress, DeltaStreamReader};
use crate::traits::{ByteStream, Headers, HttpClient};

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.medivibe.health";

/// Path of the streaming chat endpoint.
pub const CHAT_PATH: &str = "/functions/v1/health-chat";

/// Client for the streaming chat API.
///
/// # Example
///
/// ```ignore
/// use medivibe::chat::ChatClient;
/// use medivibe::models::{ChatMessage, ChatRequest};
///
/// let client = ChatClient::new();
/// let request = ChatRequest::health(vec![ChatMessage::user("What is BMI?")]);
/// let reply = client.stream_chat(&request, |content| print!("\r{}", content)).await?;
/// ```
#[derive(Clone)]
pub struct ChatClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl ChatClient {
    /// Create a client against the default backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Arc::new(ReqwestHttpClient::new()),
        }
    }

    /// Create a client with a custom HTTP implementation, for testing.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }

    /// Open the streaming connection and classify the response status.
    ///
    /// Returns the body stream only for a 2xx response that actually carries
    /// one; 429 and 402 map to their dedicated error variants.
    async fn open_stream(&self, request: &ChatRequest) -> Result<ByteStream, VibeError> {
        let body = serde_json::to_string(request)?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        let url = self.chat_url();
        debug!(url = %url, kind = request.kind.as_str(), "opening chat stream");

        let response = self
            .http
            .post_stream(&url, &body, &headers)
            .await
            .map_err(NetworkError::from)?;

        if !response.is_success() {
            let retry_after = response.retry_after_secs();
            let err = classify_status(response.status, retry_after);
            warn!(status = response.status, code = err.error_code(), "chat request rejected");
            return Err(err.into());
        }

        let stream = response.body.ok_or(NetworkError::MissingBody)?;
        Ok(stream)
    }

    /// Stream one chat completion, invoking `on_content` with the full
    /// running content after each delta. Returns the final content.
    #[instrument(skip(self, request, on_content), fields(kind = request.kind.as_str()))]
    pub async fn stream_chat<F>(&self, request: &ChatRequest, mut on_content: F) -> VibeResult<String>
    where
        F: FnMut(&str),
    {
        let mut body = self
            .open_stream(request)
            .await
            .with_context(|| {
                ErrorContext::new("stream_chat").with_assistant(request.kind.as_str())
            })?;

        let mut reader = DeltaStreamReader::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| StreamError::ConnectionLost {
                message: e.to_string(),
            })?;
            if let ChunkProgress::Done = reader.feed_chunk(&chunk, &mut on_content)? {
                break;
            }
        }
        if !reader.is_done() {
            reader.finish(&mut on_content)?;
        }

        info!(content_len = reader.content().len(), "chat stream finished");
        Ok(reader.into_content())
    }

    /// Like [`stream_chat`](Self::stream_chat), but abandons the stream when
    /// the cancel signal fires. Content accumulated so far is returned with
    /// the `Cancelled` error's context intact in logs; the caller keeps
    /// whatever its sink already observed.
    pub async fn stream_chat_cancellable<F>(
        &self,
        request: &ChatRequest,
        mut on_content: F,
        mut cancel: oneshot::Receiver<()>,
    ) -> VibeResult<String>
    where
        F: FnMut(&str),
    {
        let mut body = self
            .open_stream(request)
            .await
            .with_context(|| {
                ErrorContext::new("stream_chat").with_assistant(request.kind.as_str())
            })?;

        let mut reader = DeltaStreamReader::new();
        loop {
            tokio::select! {
                biased;
                _ = &mut cancel => {
                    info!(content_len = reader.content().len(), "chat stream cancelled");
                    return Err(NetworkError::Cancelled.into());
                }
                chunk = body.next() => {
                    let Some(chunk) = chunk else { break };
                    let chunk = chunk.map_err(|e| StreamError::ConnectionLost {
                        message: e.to_string(),
                    })?;
                    if let ChunkProgress::Done = reader.feed_chunk(&chunk, &mut on_content)? {
                        break;
                    }
                }
            }
        }
        if !reader.is_done() {
            reader.finish(&mut on_content)?;
        }

        info!(content_len = reader.content().len(), "chat stream finished");
        Ok(reader.into_content())
    }

    /// Send a user message within a conversation and stream the reply into
    /// it. The conversation's in-progress assistant message tracks the
    /// running content; it is finalized whether the stream succeeds or fails,
    /// preserving any partial reply.
    pub async fn send_message<F>(
        &self,
        conversation: &mut Conversation,
        kind: AssistantKind,
        text: impl Into<String>,
        mut on_content: F,
    ) -> VibeResult<()>
    where
        F: FnMut(&str),
    {
        conversation.push_user(text);
        let request = ChatRequest::new(conversation.messages().to_vec(), kind);
        conversation.begin_assistant();

        // The borrow of the conversation inside the sink would conflict with
        // holding it across the await, so updates are applied through a
        // relay buffer owned by the closure chain.
        let mut latest = String::new();
        let result = self
            .stream_chat(&request, |content| {
                latest.clear();
                latest.push_str(content);
                on_content(content);
            })
            .await;

        conversation.apply_content(&latest);
        conversation.finalize();
        result.map(|_| ())
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
