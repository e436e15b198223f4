//! Place records resolved during knowledge retrieval

use serde::{Deserialize, Serialize};

/// Where a record's data ultimately came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordSource {
    /// Similarity hit in the external knowledge store
    Store,
    /// Built-in fixture table
    Fixture,
    /// Synthesized plausible defaults; every source missed
    Synthesized,
}

/// Descriptive metadata for one selected place
///
/// One record always exists per selected place, whatever sources failed, so
/// downstream stages never handle "place not found". Coordinates may be
/// absent; consumers treat that as "unmappable", not as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub place_name: String,
    pub description: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub district: String,
    pub city: String,

    /// Average entry fee in INR
    pub entry_fee: i64,

    /// Per-night stay cost estimate in INR
    pub stay_cost: i64,

    /// Daily local travel cost estimate in INR
    pub travel_cost: i64,

    /// Original source payload for traceability
    pub raw_meta: serde_json::Value,

    pub source: RecordSource,
}

impl PlaceRecord {
    /// Both coordinates present, eligible for routing and map rendering
    pub fn is_mappable(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}
