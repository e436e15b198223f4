//! Embedded prompt templates

/// Place-suggestion prompt for the selector stage
///
/// Placeholders: vibes, budget, duration, preferences, season, focus.
pub const PLACE_SUGGESTION: &str = "\
Suggest 4-6 best places to visit in Odisha based on:
- vibes: {vibes}
- budget: {budget} INR total
- duration: {duration} days
- preferences: {preferences}
- season of travel: {season}
- trip focus: {focus}
Return ONLY comma-separated place names, nothing else.";

/// Route-ordering prompt for the route planner
///
/// Placeholder: points (one "name (lat, lng)" entry per line).
pub const ROUTE_ORDER: &str = "\
Arrange these Odisha places into the travel route that minimizes backtracking:
{points}
Return ONLY the place names, comma-separated, nothing else.";

/// Structured-extraction prompt used by the voice front end
///
/// Kept here because the extraction schema mirrors this crate's TripDraft;
/// the front end itself lives outside the pipeline.
pub const VOICE_EXTRACTION: &str = r#"You are an intelligent travel assistant for Odisha tourism. Extract trip details from the user's speech.

RULES:
1. Extract ONLY what is clearly mentioned
2. If not mentioned, use null
3. Return valid JSON only

FIELDS TO EXTRACT:
- group_size: number of people (e.g., "we are 10 people" -> 10)
- seniors: number of seniors (60+)
- children: number of children
- specially_abled: number of specially abled
- duration: number of days
- start_date: travel date as string
- budget: amount in INR as integer (e.g., "20,000" -> 20000)
- vibes: list of themes like ["Spiritual", "Heritage", "Beach", "Nature"]
- specific_places: comma-separated places
- preferences: any food, stay, accessibility preferences
- confidence: your confidence 0.0 to 1.0

Return ONLY the JSON object, nothing else."#;
