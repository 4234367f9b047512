//! Error handling for the MediVibe client.
//!
//! Domain-specific error enums (`NetworkError`, `StreamError`, `InputError`,
//! `BookingError`) unify into [`VibeError`], which carries categorization,
//! retry hints, user-facing messages, short error codes for logging, and
//! optional [`ErrorContext`] attachment.
//!
//! # Example
//!
//! ```ignore
//! use medivibe::error::{ResultExt, VibeResult};
//!
//! fn fetch() -> VibeResult<()> {
//!     open_stream().context("stream_chat")?;
//!     Ok(())
//! }
//! ```

mod booking;
mod category;
mod context;
mod input;
mod network;
mod result;
mod stream;
mod vibe_error;

pub use booking::BookingError;
pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use input::InputError;
pub use network::{classify_status, NetworkError};
pub use result::{ResultExt, VibeResult};
pub use stream::StreamError;
pub use vibe_error::VibeError;
