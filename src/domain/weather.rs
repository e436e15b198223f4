//! Synthetic weather readings
//!
//! Weather is sampled from season-conditioned ranges, not measured; the
//! categorization boundaries here are the contract the samples are read
//! against.

use serde::{Deserialize, Serialize};

/// Categorize a temperature in degrees Celsius
///
/// Cool below 20, Warm 20-30 inclusive, Hot above 30.
pub fn categorize_temperature(celsius: f64) -> &'static str {
    if celsius < 20.0 {
        "Cool"
    } else if celsius <= 30.0 {
        "Warm"
    } else {
        "Hot"
    }
}

/// Categorize relative humidity in percent
///
/// Dry below 40, Comfortable 40-70 inclusive, Humid above 70.
pub fn categorize_humidity(percent: f64) -> &'static str {
    if percent < 40.0 {
        "Dry"
    } else if percent <= 70.0 {
        "Comfortable"
    } else {
        "Humid"
    }
}

/// One synthetic, season-conditioned weather sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub humidity: f64,
    pub temp_desc: String,
    pub humidity_desc: String,
    pub season: String,
    pub summary: String,
}

impl WeatherReading {
    /// Build a reading from raw samples, deriving descriptors and summary
    pub fn from_samples(temp_c: f64, humidity: f64, season: &str) -> Self {
        let temp_desc = categorize_temperature(temp_c);
        let humidity_desc = categorize_humidity(humidity);
        let summary = format!(
            "{} ({}°C), {} humidity ({}%)",
            temp_desc, temp_c, humidity_desc, humidity
        );
        Self {
            temp_c,
            humidity,
            temp_desc: temp_desc.to_string(),
            humidity_desc: humidity_desc.to_string(),
            season: season.to_string(),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_boundaries() {
        assert_eq!(categorize_temperature(19.9), "Cool");
        assert_eq!(categorize_temperature(20.0), "Warm");
        assert_eq!(categorize_temperature(30.0), "Warm");
        assert_eq!(categorize_temperature(30.1), "Hot");
    }

    #[test]
    fn test_humidity_boundaries() {
        assert_eq!(categorize_humidity(39.9), "Dry");
        assert_eq!(categorize_humidity(40.0), "Comfortable");
        assert_eq!(categorize_humidity(70.0), "Comfortable");
        assert_eq!(categorize_humidity(70.1), "Humid");
    }

    #[test]
    fn test_reading_summary() {
        let reading = WeatherReading::from_samples(18.5, 35.0, "Winter");
        assert_eq!(reading.temp_desc, "Cool");
        assert_eq!(reading.humidity_desc, "Dry");
        assert_eq!(reading.summary, "Cool (18.5°C), Dry humidity (35%)");
    }
}
