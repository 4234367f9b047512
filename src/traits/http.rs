//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the streaming HTTP operation,
//! enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Incrementally delivered response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// A response whose body arrives incrementally.
///
/// Status and headers are available before any body bytes, so callers can
/// classify throttling and billing statuses without touching the stream. The
/// body is optional: a server can answer 2xx and still send nothing.
pub struct StreamingResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Response body, if the server sent one.
    pub body: Option<ByteStream>,
}

impl StreamingResponse {
    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the `Retry-After` header as a whole number of seconds.
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("retry-after"))
            .and_then(|(_, v)| v.trim().parse().ok())
    }
}

impl std::fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}

/// HTTP transport errors.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed.
    ConnectionFailed { url: String, message: String },
    /// Request timed out.
    Timeout { operation: String, duration_secs: u64 },
    /// IO error while reading the body.
    Io { message: String },
    /// Other error.
    Other { message: String },
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            HttpError::Timeout { operation, duration_secs } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            HttpError::Io { message } => write!(f, "IO error: {}", message),
            HttpError::Other { message } => write!(f, "HTTP error: {}", message),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for the streaming HTTP operation.
///
/// Implementations include the production reqwest-based client and a mock
/// client for tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request and return the response with an incrementally
    /// delivered body.
    ///
    /// Transport failures before any response arrives are errors; a response
    /// of any status is returned as-is for the caller to classify.
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let resp = StreamingResponse {
            status: 200,
            headers: Headers::new(),
            body: None,
        };
        assert!(resp.is_success());

        let resp = StreamingResponse {
            status: 429,
            headers: Headers::new(),
            body: None,
        };
        assert!(!resp.is_success());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = Headers::new();
        headers.insert("Retry-After".to_string(), "30".to_string());
        let resp = StreamingResponse {
            status: 429,
            headers,
            body: None,
        };
        assert_eq!(resp.retry_after_secs(), Some(30));
    }

    #[test]
    fn test_retry_after_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("retry-after".to_string(), " 5 ".to_string());
        let resp = StreamingResponse {
            status: 429,
            headers,
            body: None,
        };
        assert_eq!(resp.retry_after_secs(), Some(5));
    }

    #[test]
    fn test_retry_after_missing_or_invalid() {
        let resp = StreamingResponse {
            status: 429,
            headers: Headers::new(),
            body: None,
        };
        assert_eq!(resp.retry_after_secs(), None);

        let mut headers = Headers::new();
        // HTTP-date form is not supported; we only honor delta-seconds.
        headers.insert(
            "Retry-After".to_string(),
            "Wed, 21 Oct 2026 07:28:00 GMT".to_string(),
        );
        let resp = StreamingResponse {
            status: 429,
            headers,
            body: None,
        };
        assert_eq!(resp.retry_after_secs(), None);
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::ConnectionFailed {
            url: "https://example.com".to_string(),
            message: "refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Connection failed to 'https://example.com': refused"
        );
        assert_eq!(
            HttpError::Io {
                message: "read failed".to_string()
            }
            .to_string(),
            "IO error: read failed"
        );
    }
}
