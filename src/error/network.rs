//! Network-related error types.
//!
//! Errors raised while opening and reading the streaming HTTP connection,
//! including the backend's throttling and billing responses.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        operation: String,
        duration_secs: u64,
    },

    /// HTTP status error (non-2xx response) not otherwise classified.
    HttpStatus {
        status: u16,
        message: String,
    },

    /// Rate limited by the server (HTTP 429).
    RateLimited {
        retry_after_secs: Option<u64>,
    },

    /// The account's credits are exhausted (HTTP 402).
    QuotaExhausted,

    /// The server accepted the request but returned no response body.
    MissingBody,

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::RateLimited { .. } => true,
            NetworkError::QuotaExhausted => false,
            NetworkError::MissingBody => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { operation, duration_secs } => {
                format!(
                    "The {} operation timed out after {} seconds. The server may be slow or unreachable.",
                    operation, duration_secs
                )
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}). Please try again.", status),
            },
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => format!(
                    "Too many requests. Please wait {} seconds before trying again.",
                    secs
                ),
                None => "Too many requests. Please wait a moment and try again.".to_string(),
            },
            NetworkError::QuotaExhausted => {
                "Your credits are exhausted. Please top up your account to continue.".to_string()
            }
            NetworkError::MissingBody => {
                "The server returned an empty response. Please try again.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => {
                format!("Network error: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::QuotaExhausted => "E_NET_QUOTA",
            NetworkError::MissingBody => "E_NET_NOBODY",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { operation, duration_secs } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            NetworkError::QuotaExhausted => {
                write!(f, "Credits exhausted (HTTP 402)")
            }
            NetworkError::MissingBody => {
                write!(f, "Response had no body")
            }
            NetworkError::Cancelled => {
                write!(f, "Request cancelled")
            }
            NetworkError::Other { message } => {
                write!(f, "Network error: {}", message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a non-success HTTP status into a NetworkError.
///
/// 429 and 402 get dedicated variants so callers can drive throttling and
/// billing flows; everything else falls through to `HttpStatus`.
pub fn classify_status(status: u16, retry_after_secs: Option<u64>) -> NetworkError {
    match status {
        429 => NetworkError::RateLimited { retry_after_secs },
        402 => NetworkError::QuotaExhausted,
        _ => NetworkError::HttpStatus {
            status,
            message: format!("request failed with status {}", status),
        },
    }
}

impl From<HttpError> for NetworkError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed { url, message } => {
                NetworkError::ConnectionFailed { url, message }
            }
            HttpError::Timeout { operation, duration_secs } => {
                NetworkError::Timeout { operation, duration_secs }
            }
            HttpError::Io { message } | HttpError::Other { message } => {
                NetworkError::Other { message }
            }
        }
    }
}
