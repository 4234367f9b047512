//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context attached to errors for debugging and retry decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Assistant kind handling the request, if applicable.
    pub assistant: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Number of retry attempts made before this error.
    pub retry_count: u32,

    /// Component/module where the error originated.
    pub component: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            assistant: None,
            timestamp: Utc::now(),
            retry_count: 0,
            component: None,
        }
    }

    pub fn with_assistant(mut self, assistant: impl Into<String>) -> Self {
        self.assistant = Some(assistant.into());
        self
    }

    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Increment the retry count and return a new context.
    pub fn next_retry(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            assistant: self.assistant.clone(),
            timestamp: Utc::now(),
            retry_count: self.retry_count + 1,
            component: self.component.clone(),
        }
    }

    pub fn exceeded_retries(&self, max_retries: u32) -> bool {
        self.retry_count >= max_retries
    }

    /// Formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref assistant) = self.assistant {
            parts.push(format!("assistant={}", assistant));
        }

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        if self.retry_count > 0 {
            parts.push(format!("retry_count={}", self.retry_count));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref assistant) = self.assistant {
            write!(f, " assistant={}", assistant)?;
        }

        if self.retry_count > 0 {
            write!(f, " retry={}", self.retry_count)?;
        }

        Ok(())
    }
}
