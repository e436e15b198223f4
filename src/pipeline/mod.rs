//! The itinerary pipeline
//!
//! Stages run in dependency order: context -> select -> retrieve, then the
//! weather/cost and route branches concurrently (they read the same
//! retrieved snapshot and write disjoint outputs), then assembly. Every
//! stage degrades on failure instead of aborting; the only terminal errors
//! are an invalid request and an unavailable generator combined with no
//! explicit place list.

mod assemble;
mod context;
mod estimate;
mod retrieve;
mod route;
mod select;

pub use assemble::assemble;
pub use context::derive_context;
pub use estimate::{PlaceEstimate, estimate_weather_cost, sample_weather};
pub use retrieve::retrieve_places;
pub use route::plan_route;
pub use select::{select_places, split_places};

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Itinerary, PlaceRecord, RequestError, RouteInfo, TripRequest};
use crate::knowledge::{ChromaStore, Embedder, HttpEmbedder, KnowledgeStore};
use crate::llm::{self, TextGenerator};

/// Terminal pipeline errors
///
/// Everything else the pipeline can encounter degrades to a fallback and is
/// reported through the outcome's error slot instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid trip request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("text generation unavailable and no explicit places were given")]
    GeneratorUnavailable,
}

/// Process-wide collaborators, injected into every invocation
///
/// Each handle is optional: a failed initialization leaves that collaborator
/// `None` for the process lifetime and every stage branches on availability.
/// Handles are shared read-only across concurrent invocations.
pub struct Providers {
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub store: Option<Arc<dyn KnowledgeStore>>,
    pub embedder: Option<Arc<dyn Embedder>>,

    /// Results per similarity query
    pub top_k: usize,

    /// Hard cap on selected places
    pub max_places: usize,

    /// Fixed seed for reproducible weather/cost synthesis; `None` draws
    /// from OS entropy
    pub rng_seed: Option<u64>,
}

impl Providers {
    /// Initialize all collaborators from configuration
    ///
    /// A collaborator that fails to initialize is degraded to unavailable
    /// with a warning; the pipeline still runs on fallbacks.
    pub async fn from_config(config: &Config) -> Self {
        let generator = match llm::create_generator(&config.llm) {
            Ok(g) => Some(g),
            Err(e) => {
                warn!(error = %e, "text generator unavailable, selector will use fallbacks");
                None
            }
        };

        let embedder = match HttpEmbedder::from_config(&config.knowledge) {
            Ok(e) => Some(Arc::new(e) as Arc<dyn Embedder>),
            Err(e) => {
                warn!(error = %e, "embedder unavailable, retrieval will skip the store");
                None
            }
        };

        let store = match ChromaStore::connect(&config.knowledge).await {
            Ok(s) => Some(Arc::new(s) as Arc<dyn KnowledgeStore>),
            Err(e) => {
                warn!(error = %e, "knowledge store unavailable, retrieval will use fixtures");
                None
            }
        };

        Self {
            generator,
            store,
            embedder,
            top_k: config.knowledge.top_k,
            max_places: config.pipeline.max_places,
            rng_seed: config.pipeline.rng_seed,
        }
    }

    /// Providers with every collaborator unavailable
    pub fn unavailable() -> Self {
        Self {
            generator: None,
            store: None,
            embedder: None,
            top_k: 3,
            max_places: 6,
            rng_seed: None,
        }
    }

    /// Fresh RNG for one stage: seeded when configured, OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Pipeline entry contract
///
/// A non-empty `error` with a present itinerary means "degraded but
/// usable"; `itinerary: None` signals total failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub itinerary: Option<Itinerary>,
    pub selected_places: Vec<String>,
    pub records: Vec<PlaceRecord>,
    pub map: RouteInfo,
    pub error: Option<String>,
}

impl PlanOutcome {
    fn failed(error: String) -> Self {
        Self {
            itinerary: None,
            selected_places: Vec::new(),
            records: Vec::new(),
            map: RouteInfo::default(),
            error: Some(error),
        }
    }
}

/// Run the full pipeline for one request
pub async fn run(providers: &Providers, request: &TripRequest) -> PlanOutcome {
    if let Err(e) = request.validate() {
        warn!(error = %e, "run: request rejected");
        return PlanOutcome::failed(PipelineError::InvalidRequest(e).to_string());
    }

    let mut notes: Vec<String> = Vec::new();

    let context = derive_context(request);
    info!(season = %context.season, "run: context derived");

    let places = match select_places(providers, request, &context, &mut notes).await {
        Ok(places) => places,
        Err(e) => {
            warn!(error = %e, "run: terminal selection failure");
            return PlanOutcome::failed(e.to_string());
        }
    };
    info!(count = places.len(), "run: places selected");

    let records = retrieve_places(providers, &places, &mut notes).await;

    // Independent branches over the now-immutable record snapshot
    let (estimates, (route, route_note)) = tokio::join!(
        async { estimate_weather_cost(request, &context, &records, providers.rng()) },
        plan_route(providers, &records),
    );
    if let Some(note) = route_note {
        notes.push(note);
    }

    let itinerary = assemble(request, &context, &places, &records, &estimates, &route);
    info!(days = itinerary.days.len(), "run: itinerary assembled");

    PlanOutcome {
        itinerary: Some(itinerary),
        selected_places: places,
        map: route,
        records,
        error: if notes.is_empty() { None } else { Some(notes.join("; ")) },
    }
}
