//! Per-person-per-day cost breakdown
//!
//! All category shares derive from a single base figure so they stay
//! internally consistent; independent rounding may drift the sum by at most
//! one rupee from the base.

use serde::{Deserialize, Serialize};

/// Discount weight per senior, applied to the stay and travel shares
const SENIOR_DISCOUNT: f64 = 0.10;

/// Discount weight per child, applied to the stay and travel shares
const CHILD_DISCOUNT: f64 = 0.15;

/// Cost shares for one person for one day, in INR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub stay: i64,
    pub food: i64,
    pub travel: i64,
    pub activities: i64,
    pub misc: i64,

    /// The rounded per-person-per-day base the shares were cut from
    pub total_per_day: i64,

    /// Overall trip budget echoed back for display
    pub trip_budget: i64,
}

impl CostBreakdown {
    /// Split the budget into category shares
    ///
    /// Base = budget / (duration x group size). Seniors and children discount
    /// the stay and travel shares by a weighted fraction of the group; the
    /// adjustment is capped so it cannot invert sign. Caller guarantees
    /// duration and group_size are at least 1.
    pub fn compute(budget: i64, duration: u32, group_size: u32, seniors: u32, children: u32) -> Self {
        let base = budget as f64 / (duration as f64 * group_size as f64);

        let weighted =
            (seniors as f64 * SENIOR_DISCOUNT + children as f64 * CHILD_DISCOUNT) / group_size as f64;
        // Capped at zero; original intent for over-discounted groups is an
        // open product question, see DESIGN.md
        let factor = (1.0 - weighted).max(0.0);

        Self {
            stay: (base * 0.40 * factor).round() as i64,
            food: (base * 0.25).round() as i64,
            travel: (base * 0.20 * factor).round() as i64,
            activities: (base * 0.10).round() as i64,
            misc: (base * 0.05).round() as i64,
            total_per_day: base.round() as i64,
            trip_budget: budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_breakdown() {
        // budget=15000, duration=3, group=4 -> base 1250
        let cost = CostBreakdown::compute(15000, 3, 4, 0, 0);
        assert_eq!(cost.total_per_day, 1250);
        assert_eq!(cost.stay, 500);
        assert_eq!(cost.food, 313); // 312.5 rounds away from zero
        assert_eq!(cost.travel, 250);
        assert_eq!(cost.activities, 125);
        assert_eq!(cost.misc, 63); // 62.5 rounds away from zero
        assert_eq!(cost.trip_budget, 15000);
    }

    #[test]
    fn test_shares_sum_within_rounding_unit() {
        for budget in [7000, 15000, 99999] {
            let cost = CostBreakdown::compute(budget, 3, 4, 0, 0);
            let sum = cost.stay + cost.food + cost.travel + cost.activities + cost.misc;
            assert!(
                (sum - cost.total_per_day).abs() <= 2,
                "budget {}: shares {} vs base {}",
                budget,
                sum,
                cost.total_per_day
            );
        }
    }

    #[test]
    fn test_senior_child_discount_hits_stay_and_travel_only() {
        let plain = CostBreakdown::compute(12000, 2, 4, 0, 0);
        let discounted = CostBreakdown::compute(12000, 2, 4, 1, 1);

        assert!(discounted.stay < plain.stay);
        assert!(discounted.travel < plain.travel);
        assert_eq!(discounted.food, plain.food);
        assert_eq!(discounted.activities, plain.activities);
        assert_eq!(discounted.misc, plain.misc);
    }

    #[test]
    fn test_adjustment_cannot_go_negative() {
        // 20 children in a group of 2 is invalid upstream, but the cap must
        // still hold for any inputs this function sees
        let cost = CostBreakdown::compute(10000, 1, 2, 0, 20);
        assert_eq!(cost.stay, 0);
        assert_eq!(cost.travel, 0);
        assert!(cost.food > 0);
    }
}
