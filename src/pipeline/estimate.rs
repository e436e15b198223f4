//! Weather and cost estimation stage
//!
//! Weather is a season-conditioned synthetic sample, never a forecast. Cost
//! is derived once from budget, duration and group composition and repeated
//! per place with that place's own fee and stay figures attached. No
//! external calls; this stage cannot fail on well-formed input.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CostBreakdown, PlaceRecord, Season, TripContext, TripRequest, WeatherReading};

/// Weather and cost attached to one retrieved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEstimate {
    pub place: String,
    pub weather: WeatherReading,
    pub cost: CostBreakdown,

    /// The place's own entry fee, from its record
    pub entry_fee: i64,

    /// The place's per-night stay estimate, from its record
    pub stay_estimate: i64,
}

/// Draw one weather reading from the season's ranges
pub fn sample_weather(season: Season, rng: &mut StdRng) -> WeatherReading {
    let (temp_range, humidity_range) = match season {
        Season::Winter => (14.0..=24.0, 30.0..=55.0),
        Season::Summer => (30.0..=40.0, 20.0..=45.0),
        Season::Monsoon => (24.0..=32.0, 70.0..=95.0),
        Season::PostMonsoon | Season::Unknown => (22.0..=32.0, 45.0..=75.0),
    };

    let temp = round1(rng.random_range(temp_range));
    let humidity = round1(rng.random_range(humidity_range));
    WeatherReading::from_samples(temp, humidity, &season.to_string())
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// One weather+cost entry per retrieved place, same order and count
pub fn estimate_weather_cost(
    request: &TripRequest,
    context: &TripContext,
    records: &[PlaceRecord],
    mut rng: StdRng,
) -> Vec<PlaceEstimate> {
    debug!(count = records.len(), season = %context.season, "estimate_weather_cost: called");

    let cost = CostBreakdown::compute(
        request.budget,
        request.duration,
        request.group_size,
        request.seniors,
        request.children,
    );

    records
        .iter()
        .map(|record| PlaceEstimate {
            place: record.place_name.clone(),
            weather: sample_weather(context.season, &mut rng),
            cost: cost.clone(),
            entry_fee: record.entry_fee,
            stay_estimate: record.stay_cost,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSource;
    use crate::pipeline::derive_context;
    use rand::SeedableRng;

    fn record(name: &str, entry_fee: i64, stay_cost: i64) -> PlaceRecord {
        PlaceRecord {
            place_name: name.to_string(),
            description: String::new(),
            lat: None,
            lng: None,
            district: String::new(),
            city: String::new(),
            entry_fee,
            stay_cost,
            travel_cost: 400,
            raw_meta: serde_json::Value::Null,
            source: RecordSource::Fixture,
        }
    }

    fn request() -> TripRequest {
        TripRequest {
            group_size: 4,
            duration: 3,
            start_date: "2025-02-14".to_string(),
            budget: 15000,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_estimate_per_record_in_order() {
        let request = request();
        let context = derive_context(&request);
        let records = vec![record("Puri", 0, 1200), record("Konark", 40, 1000)];

        let estimates =
            estimate_weather_cost(&request, &context, &records, StdRng::seed_from_u64(1));

        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].place, "Puri");
        assert_eq!(estimates[0].entry_fee, 0);
        assert_eq!(estimates[0].stay_estimate, 1200);
        assert_eq!(estimates[1].place, "Konark");
        assert_eq!(estimates[1].entry_fee, 40);
    }

    #[test]
    fn test_empty_records_yield_empty_estimates() {
        let request = request();
        let context = derive_context(&request);
        let estimates = estimate_weather_cost(&request, &context, &[], StdRng::seed_from_u64(1));
        assert!(estimates.is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let request = request();
        let context = derive_context(&request);
        let records = vec![record("Puri", 0, 1200)];

        let a = estimate_weather_cost(&request, &context, &records, StdRng::seed_from_u64(9));
        let b = estimate_weather_cost(&request, &context, &records, StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_winter_samples_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let reading = sample_weather(Season::Winter, &mut rng);
            assert!((14.0..=24.0).contains(&reading.temp_c), "{}", reading.temp_c);
            assert!(
                (30.0..=55.0).contains(&reading.humidity),
                "{}",
                reading.humidity
            );
            assert_eq!(reading.season, "Winter");
        }
    }

    #[test]
    fn test_monsoon_reads_humid() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut saw_humid = false;
        for _ in 0..50 {
            let reading = sample_weather(Season::Monsoon, &mut rng);
            assert!((70.0..=95.0).contains(&reading.humidity));
            if reading.humidity_desc == "Humid" {
                saw_humid = true;
            }
        }
        assert!(saw_humid);
    }

    #[test]
    fn test_cost_uses_reference_breakdown() {
        let request = request();
        let context = derive_context(&request);
        let records = vec![record("Puri", 0, 1200)];

        let estimates =
            estimate_weather_cost(&request, &context, &records, StdRng::seed_from_u64(1));
        let cost = &estimates[0].cost;

        assert_eq!(cost.total_per_day, 1250);
        assert_eq!(cost.stay, 500);
        assert_eq!(cost.travel, 250);
        assert_eq!(cost.trip_budget, 15000);
    }
}
