//! Place selection stage
//!
//! Explicit place lists short-circuit generation. Otherwise a
//! context-conditioned prompt asks the generator for 4-6 names, parsed
//! defensively, with a context-indexed static fallback when the call fails
//! or parses empty. The stage is only terminal when the generator was never
//! available AND no usable explicit list exists.

use tracing::{debug, warn};

use super::{PipelineError, Providers};
use crate::domain::{TripContext, TripRequest};
use crate::prompts;

/// Sampling temperature for suggestion calls
const SUGGESTION_TEMPERATURE: f32 = 0.7;

/// Parse a comma-separated place list: split, trim, drop empties
pub fn split_places(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Context-indexed static fallback, checked spiritual -> nature -> generic
fn fallback_places(context: &TripContext) -> Vec<String> {
    let names: &[&str] = if context.spiritual_focus {
        &["Puri", "Konark", "Bhubaneswar", "Cuttack"]
    } else if context.nature_focus {
        &["Chilika Lake", "Simlipal", "Daringbadi", "Bhitarkanika"]
    } else {
        &["Puri", "Konark", "Chilika Lake"]
    };
    names.iter().map(|s| s.to_string()).collect()
}

fn build_prompt(request: &TripRequest, context: &TripContext) -> String {
    let focus = if context.spiritual_focus {
        "spiritual and heritage sites"
    } else if context.nature_focus {
        "nature, lakes and wildlife"
    } else {
        "a balanced mix of highlights"
    };

    prompts::PLACE_SUGGESTION
        .replace("{vibes}", &request.vibes.join(", "))
        .replace("{budget}", &request.budget.to_string())
        .replace("{duration}", &request.duration.to_string())
        .replace("{preferences}", &request.preferences)
        .replace("{season}", &context.season.to_string())
        .replace("{focus}", focus)
}

/// Decide which named destinations the itinerary will cover
///
/// Always returns between 1 and `max_places` non-empty trimmed names.
/// Degradations are recorded in `notes`, never surfaced as errors.
pub async fn select_places(
    providers: &Providers,
    request: &TripRequest,
    context: &TripContext,
    notes: &mut Vec<String>,
) -> Result<Vec<String>, PipelineError> {
    if request.has_explicit_places() {
        let mut places = split_places(&request.specific_places);
        // A list of only commas or blanks parses empty; treat it as absent
        if !places.is_empty() {
            places.truncate(providers.max_places);
            debug!(count = places.len(), "select_places: explicit list, no generation");
            return Ok(places);
        }
        warn!("select_places: explicit list parsed empty, falling back to suggestion");
    }

    let Some(generator) = &providers.generator else {
        // The one genuinely unrecoverable case: nothing to suggest with and
        // nothing explicit to fall back on
        return Err(PipelineError::GeneratorUnavailable);
    };

    let prompt = build_prompt(request, context);
    let mut places = match generator.generate(&prompt, SUGGESTION_TEMPERATURE).await {
        Ok(text) => {
            let parsed = split_places(&text);
            if parsed.is_empty() {
                warn!("select_places: generation returned nothing usable");
                notes.push("place selection: empty suggestion, used context fallback".to_string());
                fallback_places(context)
            } else {
                parsed
            }
        }
        Err(e) => {
            warn!(error = %e, "select_places: generation failed after retries");
            notes.push(format!("place selection degraded to fallback: {}", e));
            fallback_places(context)
        }
    };

    places.truncate(providers.max_places);
    Ok(places)
}
