//! Text-generation clients
//!
//! Provides the [`TextGenerator`] trait, the Gemini implementation and the
//! retry decorator every call site goes through.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod gemini;
mod retry;

pub use client::TextGenerator;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use retry::Retrying;

use crate::config::LlmConfig;

/// Create the process-wide text generator from configuration
///
/// The raw client is wrapped in [`Retrying`] so every caller gets the same
/// bounded backoff policy without duplicating it.
pub fn create_generator(config: &LlmConfig) -> Result<Arc<dyn TextGenerator>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_generator: called");
    match config.provider.as_str() {
        "gemini" => {
            let client = GeminiClient::from_config(config)?;
            Ok(Arc::new(Retrying::from_config(client, config)))
        }
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown text-generation provider: '{}'. Supported: gemini",
            other
        ))),
    }
}
