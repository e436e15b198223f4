//! Derived trip context
//!
//! A small set of booleans and enums describing the nature of the trip,
//! computed once from the raw request and read by every later stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season band derived from the start-date month
///
/// Uses the Odisha tourist calendar: Nov-Feb winter, Mar-May summer,
/// Jun-Sep monsoon, Oct post-monsoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    PostMonsoon,
    /// Start date absent or unparsable; never guessed
    Unknown,
}

impl Season {
    /// Map a calendar month (1-12) to its season band
    pub fn from_month(month: u32) -> Self {
        match month {
            11 | 12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Summer,
            6..=9 => Season::Monsoon,
            10 => Season::PostMonsoon,
            _ => Season::Unknown,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
            Season::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Travel pace preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pace {
    Slow,
    Moderate,
}

/// Stage-1 output: the derived nature of the trip
///
/// Pure function of the request; deterministic, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripContext {
    pub season: Season,
    pub family_trip: bool,
    pub budget_trip: bool,
    pub spiritual_focus: bool,
    pub nature_focus: bool,
    pub accessibility_need: bool,
    pub dietary_restriction: bool,
    pub pace: Pace,
}
