//! Adapter implementations of the crate's trait abstractions.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
