//! Streaming-response error types.
//!
//! Errors raised while reading and decoding the event stream, after the HTTP
//! connection has been established.

use std::fmt;

/// Stream-specific error variants.
#[derive(Debug, Clone)]
pub enum StreamError {
    /// A payload line could not be parsed, even after waiting for more data.
    MalformedPayload {
        payload: String,
        message: String,
    },

    /// The transport failed mid-stream.
    ConnectionLost {
        message: String,
    },

    /// Generic stream error.
    Other {
        message: String,
    },
}

impl StreamError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            StreamError::MalformedPayload { .. } => false,
            StreamError::ConnectionLost { .. } => true,
            StreamError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::MalformedPayload { .. } => {
                "The response could not be read. Please try again.".to_string()
            }
            StreamError::ConnectionLost { .. } => {
                "The connection was interrupted. Please try again.".to_string()
            }
            StreamError::Other { message } => {
                format!("Stream error: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::MalformedPayload { .. } => "E_STREAM_PAYLOAD",
            StreamError::ConnectionLost { .. } => "E_STREAM_LOST",
            StreamError::Other { .. } => "E_STREAM_OTHER",
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::MalformedPayload { payload, message } => {
                write!(f, "Malformed payload '{}': {}", payload, message)
            }
            StreamError::ConnectionLost { message } => {
                write!(f, "Connection lost: {}", message)
            }
            StreamError::Other { message } => {
                write!(f, "Stream error: {}", message)
            }
        }
    }
}

impl std::error::Error for StreamError {}
