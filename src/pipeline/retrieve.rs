//! Knowledge retrieval stage
//!
//! Resolves each selected name through an ordered strategy chain: knowledge
//! store -> fixture table -> synthesis. Exactly one record per input name,
//! input order, whatever fails; per-place failures are isolated.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::Providers;
use crate::domain::{PlaceRecord, RecordSource};
use crate::knowledge::{KnowledgeError, PlaceMeta, fixtures};

/// Regional centroid synthesized coordinates jitter around
const REGION_CENTROID: (f64, f64) = (20.29, 85.82);

/// Degrees of jitter applied to synthesized coordinates
const COORD_JITTER: f64 = 0.4;

/// Entry fees a synthesized record may carry, in INR
const ENTRY_FEES: [i64; 5] = [0, 20, 50, 100, 250];

/// Resolve every selected place to a record
pub async fn retrieve_places(
    providers: &Providers,
    places: &[String],
    notes: &mut Vec<String>,
) -> Vec<PlaceRecord> {
    let mut rng = providers.rng();
    let mut records = Vec::with_capacity(places.len());

    for name in places {
        let record = match from_store(providers, name).await {
            Ok(Some(record)) => record,
            Ok(None) => resolve_locally(name, &mut rng),
            Err(e) => {
                warn!(place = %name, error = %e, "retrieve_places: store query failed");
                notes.push(format!("retrieval for '{}' skipped the store: {}", name, e));
                resolve_locally(name, &mut rng)
            }
        };
        records.push(record);
    }

    debug!(count = records.len(), "retrieve_places: done");
    records
}

/// Fixture table, then synthesis
fn resolve_locally(name: &str, rng: &mut StdRng) -> PlaceRecord {
    fixtures::lookup(name).unwrap_or_else(|| synthesize(name, rng))
}

/// Similarity lookup; `Ok(None)` covers both "unavailable" and "no match"
async fn from_store(providers: &Providers, name: &str) -> Result<Option<PlaceRecord>, KnowledgeError> {
    let (Some(embedder), Some(store)) = (&providers.embedder, &providers.store) else {
        return Ok(None);
    };

    let embedding = embedder.embed(name).await?;
    let hits = store.query(&embedding, providers.top_k).await?;

    let Some(meta) = hits.into_iter().next() else {
        debug!(place = %name, "from_store: no match");
        return Ok(None);
    };

    Ok(Some(record_from_meta(name, meta)))
}

/// Bind a store hit to the queried name
///
/// The record keeps the selected name as its identity so the 1:1 mapping
/// survives assembly; the store's own naming stays in `raw_meta`.
fn record_from_meta(name: &str, meta: PlaceMeta) -> PlaceRecord {
    let raw_meta = serde_json::to_value(&meta).unwrap_or(serde_json::Value::Null);
    PlaceRecord {
        place_name: name.trim().to_string(),
        description: meta
            .description
            .unwrap_or_else(|| format!("{}, a noted Odisha destination.", name.trim())),
        lat: meta.lat,
        lng: meta.lng,
        district: meta.district.unwrap_or_default(),
        city: meta.city.unwrap_or_default(),
        entry_fee: meta.entry_fee.unwrap_or(0),
        stay_cost: meta.stay_cost.unwrap_or(1200),
        travel_cost: meta.travel_cost.unwrap_or(500),
        raw_meta,
        source: RecordSource::Store,
    }
}

/// Last-resort record with plausible jittered defaults
fn synthesize(name: &str, rng: &mut StdRng) -> PlaceRecord {
    let lat = REGION_CENTROID.0 + rng.random_range(-COORD_JITTER..=COORD_JITTER);
    let lng = REGION_CENTROID.1 + rng.random_range(-COORD_JITTER..=COORD_JITTER);
    let entry_fee = ENTRY_FEES[rng.random_range(0..ENTRY_FEES.len())];

    debug!(place = %name, "synthesize: no source had this place");

    PlaceRecord {
        place_name: name.trim().to_string(),
        description: format!(
            "{}, a lesser-documented Odisha destination worth an unhurried visit.",
            name.trim()
        ),
        lat: Some((lat * 10_000.0).round() / 10_000.0),
        lng: Some((lng * 10_000.0).round() / 10_000.0),
        district: "Odisha".to_string(),
        city: String::new(),
        entry_fee,
        stay_cost: rng.random_range(800..=2500),
        travel_cost: rng.random_range(300..=1000),
        raw_meta: serde_json::Value::Null,
        source: RecordSource::Synthesized,
    }
}
