//! Itinerary assembly stage
//!
//! Partitions the place list across the requested days, enriches each day
//! with weather/cost/time-plan/tips and folds in the route and summary
//! metadata. Pure function of its inputs; weather/cost indices beyond the
//! available entries clamp to the last entry.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::PlaceEstimate;
use crate::domain::{
    CostBreakdown, DayPlan, Itinerary, Pace, PlaceRecord, PlaceVisit, RouteInfo, Season,
    TripContext, TripRequest, TripSummary, WeatherReading,
};

/// Assemble the final itinerary
pub fn assemble(
    request: &TripRequest,
    context: &TripContext,
    places: &[String],
    records: &[PlaceRecord],
    estimates: &[PlaceEstimate],
    route: &RouteInfo,
) -> Itinerary {
    debug!(places = places.len(), duration = request.duration, "assemble: called");

    let duration = request.duration.max(1) as usize;
    let chunk = (places.len() / duration).max(1);
    let start_date = NaiveDate::parse_from_str(request.start_date.trim(), "%Y-%m-%d").ok();

    let mut days = Vec::with_capacity(duration);
    for day in 1..=duration {
        let begin = ((day - 1) * chunk).min(places.len());
        let end = if day == duration {
            places.len()
        } else {
            (begin + chunk).min(places.len())
        };
        let destinations: Vec<String> = places[begin..end].to_vec();

        let (date, weekday) = day_date(start_date, &request.start_date, day);
        let visits = resolve_visits(&destinations, records);
        let (weather, cost) = day_estimate(estimates, day, request, context);

        days.push(DayPlan {
            day: day as u32,
            date,
            weekday,
            time_plan: time_plan(context, &destinations),
            tips: tips_for(context, &destinations),
            destinations,
            visits,
            weather,
            cost,
        });
    }

    Itinerary {
        trip_summary: TripSummary {
            duration: request.duration,
            start_date: request.start_date.clone(),
            total_places: places.len(),
            season: context.season.to_string(),
            group_size: request.group_size,
            vibes: request.vibes.clone(),
        },
        days,
        route: route.route_order.clone(),
        map: route.clone(),
        cost_summary: CostBreakdown::compute(
            request.budget,
            request.duration,
            request.group_size,
            request.seniors,
            request.children,
        ),
        context: context.clone(),
    }
}

fn day_date(start: Option<NaiveDate>, raw: &str, day: usize) -> (String, String) {
    match start.and_then(|d| d.checked_add_days(Days::new(day as u64 - 1))) {
        Some(date) => (
            date.format("%Y-%m-%d").to_string(),
            date.format("%A").to_string(),
        ),
        None => (raw.to_string(), "Unknown".to_string()),
    }
}

/// Enrich scheduled names from their records; unmatched names are omitted
fn resolve_visits(destinations: &[String], records: &[PlaceRecord]) -> Vec<PlaceVisit> {
    destinations
        .iter()
        .filter_map(|name| {
            records
                .iter()
                .find(|r| r.place_name.eq_ignore_ascii_case(name))
                .map(|r| PlaceVisit {
                    name: r.place_name.clone(),
                    description: r.description.clone(),
                    entry_fee: r.entry_fee,
                })
        })
        .collect()
}

/// Day entry clamped to the last available estimate
fn day_estimate(
    estimates: &[PlaceEstimate],
    day: usize,
    request: &TripRequest,
    context: &TripContext,
) -> (WeatherReading, CostBreakdown) {
    match estimates.get((day - 1).min(estimates.len().saturating_sub(1))) {
        Some(entry) => (entry.weather.clone(), entry.cost.clone()),
        // No estimates at all: derive a neutral pair rather than erroring
        None => (
            WeatherReading::from_samples(27.0, 60.0, &context.season.to_string()),
            CostBreakdown::compute(
                request.budget,
                request.duration,
                request.group_size,
                request.seniors,
                request.children,
            ),
        ),
    }
}

fn time_plan(context: &TripContext, destinations: &[String]) -> String {
    if destinations.is_empty() {
        return "Open day: local markets, cafes and an easy evening stroll".to_string();
    }
    let stops = destinations.join(", ");

    if context.family_trip {
        format!(
            "Start 9:30 AM with an easy pace, visit {}, afternoon rest stop, back by 6 PM",
            stops
        )
    } else if context.pace == Pace::Slow {
        format!("Start 10 AM, unhurried time at {}, return by 6:30 PM", stops)
    } else {
        format!("Start 8 AM, explore {}, return by 7 PM", stops)
    }
}

/// Contextual tips in fixed priority order, generic line when nothing fires
fn tips_for(context: &TripContext, destinations: &[String]) -> Vec<String> {
    let mut tips = Vec::new();
    let lowered = destinations.join(" ").to_lowercase();

    if context.accessibility_need {
        tips.push(
            "Major temples and museums have ramp access at side entrances; confirm wheelchair assistance with your hotel a day ahead.".to_string(),
        );
    }
    if context.family_trip {
        tips.push("Carry snacks and water for the children and plan a midday rest stop.".to_string());
    }
    if context.dietary_restriction {
        tips.push(
            "Pure-veg kitchens are easy to find near temple towns; mention Jain or vegan needs while ordering.".to_string(),
        );
    }
    if context.season == Season::Monsoon {
        tips.push("Monsoon showers arrive fast; pack rain covers and keep buffer time between stops.".to_string());
    }
    if context.spiritual_focus || lowered.contains("temple") || lowered.contains("monastery") {
        tips.push("Footwear stays outside shrine premises; early mornings are the quietest for darshan.".to_string());
    }
    if context.nature_focus
        || ["lake", "beach", "falls", "park", "sanctuary"]
            .iter()
            .any(|k| lowered.contains(k))
    {
        tips.push("Carry binoculars for birdlife; boats and safaris stop running by late afternoon.".to_string());
    }

    if tips.is_empty() {
        tips.push("Odisha rewards unhurried travel; leave room in the plan for roadside discoveries.".to_string());
    }
    tips
}
