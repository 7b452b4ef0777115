//! Provider-agnostic text generation interface.

use async_trait::async_trait;

/// Errors from a single generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider accepted the request but reported an error or refusal.
    #[error("provider rejected the prompt: {0}")]
    Rejected(String),

    /// The response body could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// The response decoded but carried no text.
    #[error("provider returned no text")]
    Empty,
}

/// Something that turns a prompt into raw text with one call.
///
/// Implementations perform exactly one request per call: no retries, no
/// streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
