//! Error types for endpoint transport operations.

use thiserror::Error;

/// Errors that can occur while carrying a request to an endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network connectivity error (DNS, TLS, connection refused, etc.).
    #[error("transport error: {0}")]
    Transport(String),

    /// Request exceeded deadline.
    #[error("request timeout after {0}ms")]
    Timeout(u64),

    /// Endpoint returned an error response (status >= 400), body preserved.
    #[error("backend error {status}: {body}")]
    Backend { status: u16, body: String },

    /// Optional route the endpoint does not serve (404 on /embeddings).
    #[error("endpoint not supported: {0}")]
    UnsupportedEndpoint(String),

    /// Response body was not valid JSON or missed required fields.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Classify a reqwest error into a transport-level error.
    pub fn from_reqwest(e: reqwest::Error, timeout_ms: u64) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(timeout_ms)
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
