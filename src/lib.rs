//! MediVibe: a consumer health-assistant client.
//!
//! Streams AI chat replies incrementally from the backend, computes BMI
//! readings, and books hospital appointments against a static directory.
//!
//! # Module structure
//! - `chat` - Client for the streaming chat endpoint
//! - `sse` - Incremental event-stream reading
//! - `models` - Conversations, messages, and wire types
//! - `bmi` - BMI computation and classification
//! - `booking` - Hospital directory and booking form
//! - `error` - Unified error handling
//! - `traits` - Trait abstractions for dependency injection
//! - `adapters` - Production and mock trait implementations
//! - `cli` - Command-line argument parsing

pub mod adapters;
pub mod bmi;
pub mod booking;
pub mod chat;
pub mod cli;
pub mod error;
pub mod models;
pub mod prelude;
pub mod sse;
pub mod traits;
