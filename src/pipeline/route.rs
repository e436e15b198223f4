//! Route planning stage
//!
//! Filters the retrieved snapshot down to mappable points, asks the
//! generator for a minimal-backtracking visiting order when there are
//! enough points to matter, and validates the proposal strictly: anything
//! that is not a permutation of the candidates is discarded in favor of the
//! input order.

use tracing::{debug, warn};

use super::{Providers, split_places};
use crate::domain::{PlaceRecord, RouteInfo, RoutePoint};
use crate::llm::{LlmError, TextGenerator};
use crate::prompts;

/// Map-centering fallback when no point has coordinates (Bhubaneswar)
const FALLBACK_CENTER: [f64; 2] = [20.2961, 85.8245];

/// Sampling temperature for route-ordering calls; ordering should be steady
const ROUTE_TEMPERATURE: f32 = 0.2;

/// Plan a visiting order over the mappable subset of the records
///
/// Returns the route plus an optional degradation note for the error slot.
pub async fn plan_route(providers: &Providers, records: &[PlaceRecord]) -> (RouteInfo, Option<String>) {
    let points: Vec<RoutePoint> = records
        .iter()
        .filter_map(|record| match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => Some(RoutePoint {
                name: record.place_name.clone(),
                lat,
                lng,
            }),
            _ => None,
        })
        .collect();

    if points.is_empty() {
        debug!("plan_route: no mappable points");
        return (
            RouteInfo {
                center: FALLBACK_CENTER,
                ..RouteInfo::default()
            },
            None,
        );
    }

    let input_order: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    let coords_array: Vec<[f64; 2]> = points.iter().map(|p| [p.lat, p.lng]).collect();
    let center = [points[0].lat, points[0].lng];

    let mut note = None;
    let route_order = match &providers.generator {
        Some(generator) if points.len() > 2 => {
            match propose_order(generator.as_ref(), &points).await {
                Ok(order) if is_permutation(&order, &input_order) => order,
                Ok(order) => {
                    warn!(?order, "plan_route: proposal is not a permutation of candidates");
                    note = Some("route proposal rejected, kept input order".to_string());
                    input_order.clone()
                }
                Err(e) => {
                    warn!(error = %e, "plan_route: proposal call failed, keeping input order");
                    note = Some(format!("route planning degraded: {}", e));
                    input_order.clone()
                }
            }
        }
        // Generator unavailable or too few points to matter: input order is
        // already the geographic default
        _ => input_order.clone(),
    };

    (
        RouteInfo {
            points,
            route_order,
            coords_array,
            center,
        },
        note,
    )
}

async fn propose_order(
    generator: &dyn TextGenerator,
    points: &[RoutePoint],
) -> Result<Vec<String>, LlmError> {
    let listing = points
        .iter()
        .map(|p| format!("- {} ({:.4}, {:.4})", p.name, p.lat, p.lng))
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = prompts::ROUTE_ORDER.replace("{points}", &listing);

    let text = generator.generate(&prompt, ROUTE_TEMPERATURE).await?;
    Ok(split_places(&text))
}

/// Multiset equality over names, any ordering
fn is_permutation(proposed: &[String], candidates: &[String]) -> bool {
    if proposed.len() != candidates.len() {
        return false;
    }
    let mut a: Vec<&String> = proposed.iter().collect();
    let mut b: Vec<&String> = candidates.iter().collect();
    a.sort();
    b.sort();
    a == b
}
