//! Error categorization for consistent handling and user messaging.

/// High-level category of an error, used for recovery hints and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connectivity problems (connections, timeouts, DNS).
    Network,
    /// The server misbehaved (5xx, malformed stream data).
    Server,
    /// A bug or protocol mismatch on our side.
    Client,
    /// The user can fix this themselves (bad input, missing field).
    User,
}

impl ErrorCategory {
    /// Short description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Server-side problem",
            ErrorCategory::Client => "Client-side problem",
            ErrorCategory::User => "Input needs correction",
        }
    }

    /// What the user can do about errors in this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => {
                "Check your internet connection and try again."
            }
            ErrorCategory::Server => {
                "The service is having trouble. Please try again later."
            }
            ErrorCategory::Client => {
                "Something went wrong on this device. Restarting may help."
            }
            ErrorCategory::User => "Review your input and try again.",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
        };
        write!(f, "{}", name)
    }
}
