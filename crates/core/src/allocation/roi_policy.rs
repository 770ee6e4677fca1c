//! ROI selection strategies.
//!
//! The allocator never invents a daily rate on its own: the caller supplies a
//! policy and the allocator applies whatever it yields for each investor's
//! configured range. This keeps the accrual pipeline deterministic unless the
//! caller explicitly opts into randomness.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::rates::RoiRange;

/// Strategy for picking the daily ROI rate within an investor's (or broker
/// link's) configured percent range.
pub trait RoiSelectionPolicy: Send + Sync {
    fn select_rate(&self, range: &RoiRange) -> Decimal;
}

/// Admin-typed flat override applied uniformly, ignoring per-investor ranges.
pub struct FixedRate(pub Decimal);

impl RoiSelectionPolicy for FixedRate {
    fn select_rate(&self, _range: &RoiRange) -> Decimal {
        self.0
    }
}

/// Deterministic default: the middle of the configured range.
pub struct Midpoint;

impl RoiSelectionPolicy for Midpoint {
    fn select_rate(&self, range: &RoiRange) -> Decimal {
        range.midpoint()
    }
}

/// Uniformly random rate within the range, rounded to 4 decimal places.
pub struct UniformRandom;

impl RoiSelectionPolicy for UniformRandom {
    fn select_rate(&self, range: &RoiRange) -> Decimal {
        if range.min == range.max {
            return range.min;
        }
        let fraction: f64 = rand::thread_rng().gen_range(0.0..=1.0);
        let fraction = Decimal::from_f64(fraction).unwrap_or(Decimal::ZERO);
        // Rounding can push past a bound when the range is finer than 4dp.
        (range.min + (range.max - range.min) * fraction)
            .round_dp(4)
            .clamp(range.min, range.max)
    }
}
