//! Domain types for trip planning
//!
//! Request-scoped values that flow through the pipeline. Everything here is
//! recomputed per invocation; nothing persists across runs.

mod context;
mod cost;
mod itinerary;
mod place;
mod request;
mod weather;

pub use context::{Pace, Season, TripContext};
pub use cost::CostBreakdown;
pub use itinerary::{DayPlan, Itinerary, PlaceVisit, RouteInfo, RoutePoint, TripSummary};
pub use place::{PlaceRecord, RecordSource};
pub use request::{RequestError, TripDraft, TripRequest};
pub use weather::{WeatherReading, categorize_humidity, categorize_temperature};
