//! Result type alias and context extension.

use super::context::ErrorContext;
use super::vibe_error::VibeError;

/// Result alias used across the crate.
pub type VibeResult<T> = Result<T, VibeError>;

/// Extension trait for attaching context to results.
pub trait ResultExt<T> {
    /// Attach an operation name as context to the error, if any.
    fn context(self, operation: &str) -> VibeResult<T>;

    /// Attach a lazily-built context to the error, if any.
    fn with_context<F>(self, f: F) -> VibeResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<VibeError>,
{
    fn context(self, operation: &str) -> VibeResult<T> {
        self.map_err(|e| e.into().with_context(ErrorContext::new(operation)))
    }

    fn with_context<F>(self, f: F) -> VibeResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
