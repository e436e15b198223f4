//! Knowledge retrieval error types

use thiserror::Error;

/// Errors from the knowledge store or embedding service
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    BadResponse(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
