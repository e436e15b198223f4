//! Trip request types
//!
//! [`TripRequest`] is the validated pipeline input. [`TripDraft`] is the
//! boundary shape shared with the structured-extraction front end: every
//! field optional, so a request can be built from any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a trip request violates its invariants
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("group size must be between 1 and 20, got {0}")]
    GroupSize(u32),

    #[error("seniors ({seniors}) + children ({children}) exceed group size ({group_size})")]
    GroupComposition {
        seniors: u32,
        children: u32,
        group_size: u32,
    },

    #[error("duration must be between 1 and 30 days, got {0}")]
    Duration(u32),

    #[error("budget must be positive, got {0}")]
    Budget(i64),
}

/// A validated trip request, immutable for the lifetime of one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRequest {
    pub group_size: u32,
    pub seniors: u32,
    pub children: u32,
    pub specially_abled: u32,

    /// Trip length in days
    pub duration: u32,

    /// Start date as supplied, expected `YYYY-MM-DD` but never trusted
    pub start_date: String,

    /// Total trip budget in INR
    pub budget: i64,

    /// Thematic tags like "Spiritual" or "Nature"
    pub vibes: Vec<String>,

    /// Comma-separated explicit place list; empty means "suggest for me"
    pub specific_places: String,

    /// Free-text food/stay/accessibility preferences
    pub preferences: String,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            group_size: 1,
            seniors: 0,
            children: 0,
            specially_abled: 0,
            duration: 1,
            start_date: String::new(),
            budget: 0,
            vibes: Vec::new(),
            specific_places: String::new(),
            preferences: String::new(),
        }
    }
}

impl TripRequest {
    /// Check the request invariants
    ///
    /// Form validation lives at the web boundary; this is the pipeline's own
    /// guard so a hand-built request cannot poison downstream arithmetic.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.group_size < 1 || self.group_size > 20 {
            return Err(RequestError::GroupSize(self.group_size));
        }
        // Widened so extreme counts cannot wrap past the bound
        if u64::from(self.seniors) + u64::from(self.children) > u64::from(self.group_size) {
            return Err(RequestError::GroupComposition {
                seniors: self.seniors,
                children: self.children,
                group_size: self.group_size,
            });
        }
        if self.duration < 1 || self.duration > 30 {
            return Err(RequestError::Duration(self.duration));
        }
        if self.budget <= 0 {
            return Err(RequestError::Budget(self.budget));
        }
        Ok(())
    }

    /// Whether the caller pinned an explicit place list
    pub fn has_explicit_places(&self) -> bool {
        !self.specific_places.trim().is_empty()
    }
}

/// Partially-extracted trip data from the voice/structured-extraction front end
///
/// Mirrors the extraction schema: all fields optional, plus the transcript
/// and the extractor's confidence. A failed extraction arrives as all-null
/// fields with confidence 0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripDraft {
    pub group_size: Option<u32>,
    pub seniors: Option<u32>,
    pub children: Option<u32>,
    pub specially_abled: Option<u32>,
    pub duration: Option<u32>,
    pub start_date: Option<String>,
    pub budget: Option<i64>,
    pub vibes: Option<Vec<String>>,
    pub specific_places: Option<String>,
    pub preferences: Option<String>,

    /// English transcript the fields were extracted from
    pub transcript: Option<String>,

    /// Extractor confidence, 0.0 on failure
    pub confidence: f64,
}

impl TripDraft {
    /// Fill absent fields with defaults and produce a request
    ///
    /// Absent numeric fields default rather than error; the result still has
    /// to pass [`TripRequest::validate`] before the pipeline will accept it.
    pub fn into_request(self) -> TripRequest {
        TripRequest {
            group_size: self.group_size.unwrap_or(1),
            seniors: self.seniors.unwrap_or(0),
            children: self.children.unwrap_or(0),
            specially_abled: self.specially_abled.unwrap_or(0),
            duration: self.duration.unwrap_or(1),
            start_date: self.start_date.unwrap_or_default(),
            budget: self.budget.unwrap_or(0),
            vibes: self.vibes.unwrap_or_default(),
            specific_places: self.specific_places.unwrap_or_default(),
            preferences: self.preferences.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> TripRequest {
        TripRequest {
            group_size: 4,
            duration: 3,
            start_date: "2025-02-14".to_string(),
            budget: 15000,
            vibes: vec!["Spiritual".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_group_composition_invariant() {
        let request = TripRequest {
            seniors: 3,
            children: 2,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(RequestError::GroupComposition { .. })
        ));
    }

    #[test]
    fn test_group_composition_check_survives_extreme_counts() {
        // Sums near u32::MAX must reject, not wrap around to "valid"
        let request = TripRequest {
            seniors: u32::MAX,
            children: 1,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(RequestError::GroupComposition { .. })
        ));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let request = TripRequest {
            budget: 0,
            ..valid_request()
        };
        assert!(matches!(request.validate(), Err(RequestError::Budget(0))));
    }

    #[test]
    fn test_duration_bounds() {
        let request = TripRequest {
            duration: 0,
            ..valid_request()
        };
        assert!(matches!(request.validate(), Err(RequestError::Duration(0))));

        let request = TripRequest {
            duration: 31,
            ..valid_request()
        };
        assert!(matches!(request.validate(), Err(RequestError::Duration(31))));
    }

    #[test]
    fn test_draft_with_all_fields_absent() {
        let draft = TripDraft::default();
        assert_eq!(draft.confidence, 0.0);

        let request = draft.into_request();
        assert_eq!(request.group_size, 1);
        assert_eq!(request.duration, 1);
        // Still fails validation: no budget extracted
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_draft_partial_extraction() {
        let draft = TripDraft {
            group_size: Some(5),
            budget: Some(30000),
            specific_places: Some("Puri, Konark".to_string()),
            confidence: 0.85,
            ..Default::default()
        };

        let request = draft.into_request();
        assert_eq!(request.group_size, 5);
        assert!(request.has_explicit_places());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: TripRequest =
            serde_json::from_str(r#"{"group_size": 2, "budget": 10000}"#).unwrap();
        assert_eq!(request.group_size, 2);
        assert_eq!(request.duration, 1);
        assert!(!request.has_explicit_places());
    }
}
