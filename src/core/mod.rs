// File: core/mod.rs
// Shared plumbing for every provider: configuration, errors, body decoding
// and the HTTP client.

pub mod config;
pub mod error;
pub mod http;
pub mod json;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use error::{ApiError, CoreError};
pub use http::{HttpClient, RequestOptions};
