//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::traits::{Headers, HttpClient, HttpError, StreamingResponse};

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// Allows advanced configuration like custom timeouts or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert a reqwest error to HttpError.
    fn convert_error(url: &str, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout {
                operation: "HTTP request".to_string(),
                duration_secs: 30,
            }
        } else if err.is_connect() {
            HttpError::ConnectionFailed {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            HttpError::Other {
                message: err.to_string(),
            }
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError> {
        let builder = self.client.post(url).body(body.to_string());
        let builder = Self::apply_headers(builder, headers);

        let response = builder
            .send()
            .await
            .map_err(|e| Self::convert_error(url, e))?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());

        let stream = response.bytes_stream().map(|result| {
            result.map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout {
                        operation: "body read".to_string(),
                        duration_secs: 30,
                    }
                } else {
                    HttpError::Io {
                        message: e.to_string(),
                    }
                }
            })
        });

        // reqwest always exposes a body stream; the caller decides what an
        // empty one means. Status and headers are available up front.
        Ok(StreamingResponse {
            status,
            headers: response_headers,
            body: Some(Box::pin(stream)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default() {
        let client = ReqwestHttpClient::new();
        let _ = client.inner();
        let client = ReqwestHttpClient::default();
        let _ = client.inner();
    }

    #[test]
    fn test_with_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestHttpClient::with_client(custom);
        let _ = client.inner();
    }

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::RETRY_AFTER,
            "30".parse().unwrap(),
        );
        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(headers.get("retry-after"), Some(&"30".to_string()));
    }

    #[tokio::test]
    async fn test_post_stream_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post_stream("http://127.0.0.1:59999/test", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }
}
