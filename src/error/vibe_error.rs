//! Unified error type for the MediVibe client.

use std::fmt;

use super::booking::BookingError;
use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::input::InputError;
use super::network::NetworkError;
use super::stream::StreamError;

/// Unified error type consolidating every domain-specific error, enabling
/// consistent categorization, retry logic, and user messaging.
#[derive(Debug)]
pub enum VibeError {
    /// Network-related errors (connections, HTTP, timeouts).
    Network(NetworkError),

    /// Streaming-response processing errors.
    Stream(StreamError),

    /// Invalid numeric input to a health calculation.
    Input(InputError),

    /// Booking-form validation errors.
    Booking(BookingError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<VibeError>,
        context: ErrorContext,
    },
}

impl VibeError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            VibeError::Network(err) => match err {
                NetworkError::HttpStatus { status, .. } if *status >= 500 => {
                    ErrorCategory::Server
                }
                NetworkError::MissingBody => ErrorCategory::Server,
                NetworkError::QuotaExhausted => ErrorCategory::User,
                _ => ErrorCategory::Network,
            },
            VibeError::Stream(err) => match err {
                StreamError::ConnectionLost { .. } => ErrorCategory::Network,
                StreamError::MalformedPayload { .. } => ErrorCategory::Server,
                StreamError::Other { .. } => ErrorCategory::Client,
            },
            VibeError::Input(_) => ErrorCategory::User,
            VibeError::Booking(_) => ErrorCategory::User,
            VibeError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            VibeError::Network(err) => err.is_retryable(),
            VibeError::Stream(err) => err.is_retryable(),
            VibeError::Input(_) => false,
            VibeError::Booking(_) => false,
            VibeError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            VibeError::Network(err) => err.user_message(),
            VibeError::Stream(err) => err.user_message(),
            VibeError::Input(err) => err.user_message(),
            VibeError::Booking(err) => err.user_message(),
            VibeError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            VibeError::Network(err) => err.error_code(),
            VibeError::Stream(err) => err.error_code(),
            VibeError::Input(err) => err.error_code(),
            VibeError::Booking(err) => err.error_code(),
            VibeError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        VibeError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            VibeError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &VibeError {
        match self {
            VibeError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for VibeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VibeError::Network(err) => write!(f, "{}", err),
            VibeError::Stream(err) => write!(f, "{}", err),
            VibeError::Input(err) => write!(f, "{}", err),
            VibeError::Booking(err) => write!(f, "{}", err),
            VibeError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for VibeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VibeError::Network(err) => Some(err),
            VibeError::Stream(err) => Some(err),
            VibeError::Input(err) => Some(err),
            VibeError::Booking(err) => Some(err),
            VibeError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for VibeError {
    fn from(err: NetworkError) -> Self {
        VibeError::Network(err)
    }
}

impl From<StreamError> for VibeError {
    fn from(err: StreamError) -> Self {
        VibeError::Stream(err)
    }
}

impl From<InputError> for VibeError {
    fn from(err: InputError) -> Self {
        VibeError::Input(err)
    }
}

impl From<BookingError> for VibeError {
    fn from(err: BookingError) -> Self {
        VibeError::Booking(err)
    }
}

impl From<serde_json::Error> for VibeError {
    fn from(err: serde_json::Error) -> Self {
        VibeError::Stream(StreamError::Other {
            message: err.to_string(),
        })
    }
}
