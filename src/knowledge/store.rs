//! Knowledge store trait and Chroma client
//!
//! The store is queried once per place name per retrieval. Results are
//! ranked metadata records; an empty result is a miss, not an error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::KnowledgeError;
use crate::config::KnowledgeConfig;

/// Metadata payload attached to one stored place document
///
/// Field names match what the batch loader writes; anything the loader left
/// out deserializes as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceMeta {
    pub place_name: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub entry_fee: Option<i64>,
    pub stay_cost: Option<i64>,
    pub travel_cost: Option<i64>,
}

/// Ranked similarity lookup against the external knowledge store
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Return up to `top_k` records ranked by similarity to `embedding`
    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<PlaceMeta>, KnowledgeError>;
}

/// Chroma HTTP client
///
/// Resolves the collection id once at connect time; a failed connect leaves
/// the store unavailable for the process lifetime rather than erroring per
/// request.
pub struct ChromaStore {
    base_url: String,
    collection_id: String,
    http: Client,
}

impl ChromaStore {
    /// Connect and resolve the configured collection
    pub async fn connect(config: &KnowledgeConfig) -> Result<Self, KnowledgeError> {
        debug!(store_url = %config.store_url, collection = %config.collection, "connect: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let base_url = config.store_url.trim_end_matches('/').to_string();
        let url = format!("{}/api/v1/collections/{}", base_url, config.collection);

        let response = http.get(&url).send().await?;
        if response.status().as_u16() == 404 {
            return Err(KnowledgeError::CollectionNotFound(config.collection.clone()));
        }
        if !response.status().is_success() {
            return Err(KnowledgeError::BadResponse(format!(
                "collection lookup returned {}",
                response.status()
            )));
        }

        let collection: CollectionInfo = response.json().await?;
        debug!(collection_id = %collection.id, "connect: collection resolved");

        Ok(Self {
            base_url,
            collection_id: collection.id,
            http,
        })
    }
}

#[async_trait]
impl KnowledgeStore for ChromaStore {
    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<PlaceMeta>, KnowledgeError> {
        debug!(dim = embedding.len(), top_k, "query: called");
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, self.collection_id
        );

        let body = serde_json::json!({
            "query_embeddings": [embedding],
            "n_results": top_k,
            "include": ["metadatas"],
        });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(KnowledgeError::BadResponse(format!(
                "query returned {}",
                response.status()
            )));
        }

        let result: QueryResponse = response.json().await?;

        // One query vector in, so one inner list out
        let metadatas = result.metadatas.into_iter().next().unwrap_or_default();
        debug!(hits = metadatas.len(), "query: done");
        Ok(metadatas)
    }
}

#[derive(Debug, Deserialize)]
struct CollectionInfo {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResponse {
    metadatas: Vec<Vec<PlaceMeta>>,
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted store for unit tests; pops one result batch per query
    pub struct MockStore {
        batches: Mutex<VecDeque<Vec<PlaceMeta>>>,
    }

    impl MockStore {
        pub fn new(batches: Vec<Vec<PlaceMeta>>) -> Self {
            Self {
                batches: Mutex::new(batches.into()),
            }
        }

        /// Store that misses on every query
        pub fn empty() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl KnowledgeStore for MockStore {
        async fn query(
            &self,
            _embedding: &[f32],
            _top_k: usize,
        ) -> Result<Vec<PlaceMeta>, KnowledgeError> {
            Ok(self
                .batches
                .lock()
                .expect("mock store lock poisoned")
                .pop_front()
                .unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_shape() {
        let json = r#"{
            "ids": [["abc"]],
            "metadatas": [[
                {
                    "place_name": "Jagannath Temple",
                    "description": "Char Dham shrine",
                    "lat": 19.8048,
                    "lng": 85.8179,
                    "district": "Puri",
                    "city": "Puri",
                    "entry_fee": 0,
                    "stay_cost": 1200,
                    "travel_cost": 400
                }
            ]]
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let meta = &response.metadatas[0][0];
        assert_eq!(meta.place_name.as_deref(), Some("Jagannath Temple"));
        assert_eq!(meta.lat, Some(19.8048));
    }

    #[test]
    fn test_query_response_tolerates_missing_fields() {
        let json = r#"{"metadatas": [[ {"place_name": "Somewhere"} ]]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let meta = &response.metadatas[0][0];
        assert!(meta.lat.is_none());
        assert!(meta.entry_fee.is_none());
    }
}
