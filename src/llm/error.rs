//! Text-generation error types

use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::ApiError { status, .. } => {
                *status >= 500 || matches!(status, 408 | 429)
            }
            LlmError::Network(_) => true,
            // A malformed or empty completion is transient; a fresh sample
            // usually comes back well-formed
            LlmError::InvalidResponse(_) => true,
            LlmError::MissingApiKey(_) => false,
            LlmError::Json(_) => false,
        }
    }
}
