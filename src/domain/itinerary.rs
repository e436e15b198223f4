//! Route and itinerary output types

use serde::{Deserialize, Serialize};

use super::{CostBreakdown, TripContext, WeatherReading};

/// A place with resolved coordinates, ready for map rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Route-planning output
///
/// `route_order` is always a permutation of the point names; a proposal
/// failing that check was discarded upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Mappable places in selection order
    pub points: Vec<RoutePoint>,

    /// Proposed visiting order (place names)
    pub route_order: Vec<String>,

    /// `[lat, lng]` pairs parallel to `points`, for the map layer
    pub coords_array: Vec<[f64; 2]>,

    /// Map-centering hint: first point, or the regional fallback
    pub center: [f64; 2],
}

/// A place summary scheduled on a particular day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceVisit {
    pub name: String,
    pub description: String,
    pub entry_fee: i64,
}

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index
    pub day: u32,

    /// Calendar date, `YYYY-MM-DD`, or the raw start string when unparsable
    pub date: String,

    pub weekday: String,

    /// Place names scheduled this day
    pub destinations: Vec<String>,

    /// Destinations enriched from their place records; names with no record
    /// are simply omitted here
    pub visits: Vec<PlaceVisit>,

    pub time_plan: String,
    pub weather: WeatherReading,
    pub cost: CostBreakdown,
    pub tips: Vec<String>,
}

/// Headline trip facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub duration: u32,
    pub start_date: String,
    pub total_places: usize,
    pub season: String,
    pub group_size: u32,
    pub vibes: Vec<String>,
}

/// The assembled itinerary, returned to the caller as one immutable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub trip_summary: TripSummary,
    pub days: Vec<DayPlan>,

    /// Final visiting order from route planning
    pub route: Vec<String>,

    /// Full map payload for rendering
    pub map: RouteInfo,

    /// Overall per-person-per-day cost picture
    pub cost_summary: CostBreakdown,

    /// The derived context this itinerary was planned under
    pub context: TripContext,
}
