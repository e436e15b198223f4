//! Knowledge retrieval clients
//!
//! The external knowledge store holds place records extracted by the batch
//! tourism-data loader (out of scope here); this module provides the query
//! side: an [`Embedder`] to vectorize place names, a [`KnowledgeStore`] to
//! run similarity lookups, and the built-in [`fixtures`] table used when the
//! store is unavailable or has no match.

pub mod embed;
mod error;
pub mod fixtures;
pub mod store;

pub use embed::{Embedder, HttpEmbedder};
pub use error::KnowledgeError;
pub use store::{ChromaStore, KnowledgeStore, PlaceMeta};
