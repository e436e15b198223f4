//! Retry decorator for text generation
//!
//! Bounded retry with exponential backoff plus random jitter, wrapped around
//! any [`TextGenerator`] so every call site shares one policy.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::warn;

use super::{LlmError, TextGenerator};
use crate::config::LlmConfig;

/// Upper bound on the random jitter added to each backoff delay
const JITTER_MS: u64 = 250;

/// Wraps a generator with bounded exponential-backoff retry
pub struct Retrying<G> {
    inner: G,
    max_attempts: u32,
    initial_backoff: Duration,
}

impl<G: TextGenerator> Retrying<G> {
    pub fn new(inner: G, max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    pub fn from_config(inner: G, config: &LlmConfig) -> Self {
        Self::new(
            inner,
            config.max_attempts,
            Duration::from_millis(config.initial_backoff_ms),
        )
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        // Doubles each attempt: initial, 2x, 4x, ...
        let base = self.initial_backoff * 2u32.saturating_pow(attempt - 1);
        let jitter = rand::rng().random_range(0..=JITTER_MS);
        base + Duration::from_millis(jitter)
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for Retrying<G> {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                let backoff = self.backoff_for(attempt - 1);
                warn!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "generate: retrying after transient error"
                );
                tokio::time::sleep(backoff).await;
            }

            match self.inner.generate(prompt, temperature).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::InvalidResponse("retries exhausted".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockGenerator;

    fn transient() -> LlmError {
        LlmError::ApiError {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let mock = MockGenerator::new(vec![
            Err(transient()),
            Err(transient()),
            Ok("Puri, Konark".to_string()),
        ]);
        let retrying = Retrying::new(mock, 3, Duration::from_millis(1));

        let result = retrying.generate("prompt", 0.7).await.unwrap();
        assert_eq!(result, "Puri, Konark");
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let mock = MockGenerator::failing();
        let retrying = Retrying::new(mock, 3, Duration::from_millis(1));

        let result = retrying.generate("prompt", 0.7).await;
        assert!(result.is_err());
        assert_eq!(retrying.inner.call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_completion_retried() {
        let mock = MockGenerator::new(vec![
            Err(LlmError::InvalidResponse("no text content".to_string())),
            Ok("Puri, Konark".to_string()),
        ]);
        let retrying = Retrying::new(mock, 3, Duration::from_millis(1));

        let result = retrying.generate("prompt", 0.7).await.unwrap();
        assert_eq!(result, "Puri, Konark");
        assert_eq!(retrying.inner.call_count(), 2);
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let mock = MockGenerator::new(vec![Err(LlmError::ApiError {
            status: 400,
            message: "bad request".to_string(),
        })]);
        let retrying = Retrying::new(mock, 5, Duration::from_millis(1));

        let result = retrying.generate("prompt", 0.7).await;
        assert!(matches!(result, Err(LlmError::ApiError { status: 400, .. })));
        assert_eq!(retrying.inner.call_count(), 1);
    }
}
