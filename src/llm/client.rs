//! TextGenerator trait definition

use async_trait::async_trait;

use super::LlmError;

/// Stateless text generation - each call is independent
///
/// The pipeline's only contract with the generative collaborator: a prompt
/// and a sampling temperature in, free-form text out. Callers parse the
/// output defensively (comma-split, trim, drop empties) and never trust
/// structure beyond that.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted generator for unit tests
    ///
    /// Pops one scripted result per call; errors once the script runs out.
    pub struct MockGenerator {
        script: Mutex<VecDeque<Result<String, LlmError>>>,
        call_count: AtomicUsize,
    }

    impl MockGenerator {
        pub fn new(script: Vec<Result<String, LlmError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Generator that answers every call with the same text
        pub fn always(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        /// Generator whose every call fails with a transient error
        pub fn failing() -> Self {
            Self::new(vec![])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, LlmError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .expect("mock script lock poisoned")
                .pop_front()
                .unwrap_or_else(|| {
                    Err(LlmError::ApiError {
                        status: 503,
                        message: "mock script exhausted".to_string(),
                    })
                })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_pops_script_in_order() {
            let mock = MockGenerator::new(vec![
                Ok("first".to_string()),
                Ok("second".to_string()),
            ]);

            assert_eq!(mock.generate("p", 0.7).await.unwrap(), "first");
            assert_eq!(mock.generate("p", 0.7).await.unwrap(), "second");
            assert!(mock.generate("p", 0.7).await.is_err());
            assert_eq!(mock.call_count(), 3);
        }
    }
}
