//! Context derivation stage
//!
//! Pure, total function of the request: no external calls, no failure mode.
//! Predicates are case-insensitive substring checks; a missing optional
//! field reads as "flag not set", never as an error.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::{Pace, Season, TripContext, TripRequest};

/// Per-person-per-day spend below which the trip counts as budget travel
const BUDGET_TIER_THRESHOLD: f64 = 1500.0;

/// Derive the trip context from a raw request
pub fn derive_context(request: &TripRequest) -> TripContext {
    debug!(start_date = %request.start_date, "derive_context: called");

    let season = season_of(&request.start_date);

    let per_person_day =
        request.budget as f64 / (request.duration.max(1) as f64 * request.group_size.max(1) as f64);

    let haystack = haystack(request);

    TripContext {
        season,
        family_trip: request.children > 0,
        budget_trip: per_person_day < BUDGET_TIER_THRESHOLD,
        spiritual_focus: contains_any(&haystack, &["spiritual", "temple", "pilgrim"]),
        nature_focus: contains_any(&haystack, &["nature", "beach", "lake", "wildlife", "waterfall"]),
        accessibility_need: request.specially_abled > 0
            || contains_any(&request.preferences.to_lowercase(), &["wheelchair", "accessib"]),
        dietary_restriction: contains_any(&request.preferences.to_lowercase(), &["veg", "vegan", "jain"]),
        pace: if request.seniors > 0
            || contains_any(&request.preferences.to_lowercase(), &["slow", "relax"])
        {
            Pace::Slow
        } else {
            Pace::Moderate
        },
    }
}

fn season_of(start_date: &str) -> Season {
    match NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d") {
        Ok(date) => Season::from_month(date.month()),
        Err(_) => Season::Unknown,
    }
}

/// Lowercased vibes + preferences, the search space for theme predicates
fn haystack(request: &TripRequest) -> String {
    let mut text = request.vibes.join(" ");
    text.push(' ');
    text.push_str(&request.preferences);
    text.to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
