//! Constant-rate inflation adjustment between calendar years.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Scales a nominal dollar amount anchored at a fixed reference year to its
/// equivalent value at an arbitrary target year.
///
/// Years at or after the reference year compound forward by `(1 + rate)` per
/// year. Years before it discount by `(1 - rate)` per year, NOT by
/// `1 / (1 + rate)`, so a forward step and a backward step do not cancel.
/// The asymmetric factor is intentional; pre-reference figures must keep it.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use cashflow_core::InflationAdjuster;
///
/// let adjuster = InflationAdjuster::default(); // 2017 reference, 2% annual
///
/// assert_eq!(adjuster.adjust(2017, dec!(100)), dec!(100));
/// assert_eq!(adjuster.adjust(2018, dec!(100)), dec!(102));
/// assert_eq!(adjuster.adjust(2016, dec!(100)), dec!(98));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationAdjuster {
    reference_year: i32,
    annual_rate: Decimal,
}

impl Default for InflationAdjuster {
    fn default() -> Self {
        Self {
            reference_year: 2017,
            annual_rate: dec!(0.02),
        }
    }
}

impl InflationAdjuster {
    pub fn new(reference_year: i32, annual_rate: Decimal) -> Self {
        Self {
            reference_year,
            annual_rate,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    /// Converts `amount` from reference-year dollars to `target_year` dollars.
    ///
    /// Pure and total: any combination of year and amount yields a value.
    pub fn adjust(&self, target_year: i32, amount: Decimal) -> Decimal {
        let delta = target_year - self.reference_year;
        let (factor, steps) = if delta >= 0 {
            (Decimal::ONE + self.annual_rate, delta)
        } else {
            (Decimal::ONE - self.annual_rate, -delta)
        };

        let mut adjusted = amount;
        for _ in 0..steps {
            adjusted *= factor;
        }
        adjusted
    }
}
