//! Mock HTTP client for testing.
//!
//! A configurable mock that scripts streaming responses, status-only
//! responses, and mid-stream failures, and records requests for verification.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, StreamingResponse};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: Headers,
    /// Request body.
    pub body: String,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Respond with a status, headers, and a scripted body stream.
    Stream {
        status: u16,
        headers: Headers,
        chunks: Vec<Bytes>,
    },
    /// Respond with a status and no body at all.
    NoBody { status: u16 },
    /// Fail the request before any response arrives.
    Error(HttpError),
    /// Deliver some chunks, then fail mid-stream.
    ChunksThenError {
        chunks: Vec<Bytes>,
        error: HttpError,
    },
}

impl MockResponse {
    /// A 200 response streaming the given chunks.
    pub fn ok_stream(chunks: Vec<Bytes>) -> Self {
        MockResponse::Stream {
            status: 200,
            headers: Headers::new(),
            chunks,
        }
    }

    /// A bodyless response with the given status and one header.
    pub fn status_with_header(status: u16, name: &str, value: &str) -> Self {
        let mut headers = Headers::new();
        headers.insert(name.to_string(), value.to_string());
        MockResponse::Stream {
            status,
            headers,
            chunks: Vec::new(),
        }
    }
}

/// Mock HTTP client for testing.
///
/// Responses are configured per URL (exact match first, then prefix match,
/// then the default), and every request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError> {
        self.record_request(url, headers, body);

        match self.get_response(url) {
            Some(MockResponse::Stream { status, headers, chunks }) => {
                let stream = futures::stream::iter(chunks.into_iter().map(Ok));
                Ok(StreamingResponse {
                    status,
                    headers,
                    body: Some(Box::pin(stream)),
                })
            }
            Some(MockResponse::NoBody { status }) => Ok(StreamingResponse {
                status,
                headers: Headers::new(),
                body: None,
            }),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::ChunksThenError { chunks, error }) => {
                let items: Vec<Result<Bytes, HttpError>> = chunks
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(error)))
                    .collect();
                Ok(StreamingResponse {
                    status: 200,
                    headers: Headers::new(),
                    body: Some(Box::pin(futures::stream::iter(items))),
                })
            }
            None => Err(HttpError::Other {
                message: format!("No mock response for URL: {}", url),
            }),
        }
    }
}
