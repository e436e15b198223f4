//! Embedding client
//!
//! Queries must be embedded with the same model the batch loader used, so
//! the expected dimension is part of the contract and checked per call.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::KnowledgeError;
use crate::config::KnowledgeConfig;

/// Turn a piece of text into a fixed-dimension vector
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, KnowledgeError>;
}

/// Client for a text-embeddings-inference style HTTP service
pub struct HttpEmbedder {
    base_url: String,
    expected_dim: usize,
    http: Client,
}

impl HttpEmbedder {
    pub fn from_config(config: &KnowledgeConfig) -> Result<Self, KnowledgeError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: config.embed_url.trim_end_matches('/').to_string(),
            expected_dim: config.embed_dim,
            http,
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, KnowledgeError> {
        debug!(text_len = text.len(), "embed: called");
        let url = format!("{}/embed", self.base_url);
        let body = serde_json::json!({ "inputs": text });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(KnowledgeError::BadResponse(format!(
                "embed returned {}",
                response.status()
            )));
        }

        let vectors: Vec<Vec<f32>> = response.json().await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| KnowledgeError::BadResponse("empty embedding batch".to_string()))?;

        if vector.len() != self.expected_dim {
            return Err(KnowledgeError::DimensionMismatch {
                expected: self.expected_dim,
                got: vector.len(),
            });
        }

        Ok(vector)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Deterministic embedder for unit tests
    ///
    /// Hashes bytes into a small fixed vector; enough to exercise the
    /// retrieval chain without a model.
    pub struct MockEmbedder {
        dim: usize,
    }

    impl MockEmbedder {
        pub fn new(dim: usize) -> Self {
            Self { dim }
        }
    }

    #[async_trait]
    impl Embedder for MockEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, KnowledgeError> {
            let mut vector = vec![0.0f32; self.dim];
            for (i, byte) in text.bytes().enumerate() {
                vector[i % self.dim] += byte as f32 / 255.0;
            }
            Ok(vector)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_embedder_is_deterministic() {
            let embedder = MockEmbedder::new(8);
            let a = embedder.embed("Puri").await.unwrap();
            let b = embedder.embed("Puri").await.unwrap();
            assert_eq!(a, b);
            assert_eq!(a.len(), 8);
        }
    }
}
