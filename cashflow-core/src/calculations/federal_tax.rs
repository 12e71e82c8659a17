//! Simplified federal income tax estimation for projection years.
//!
//! The estimate uses the published 2017 federal rate schedules (seven
//! brackets per filing status at 10%, 15%, 25%, 28%, 33%, 35% and 39.6%)
//! with every dollar threshold and cumulative base tax inflation-adjusted
//! from 2017 to the projection year. Deductions, credits and state taxes
//! are outside the model: the result is an estimate against gross
//! combined income, not a filing-accurate liability.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cashflow_core::{FederalTaxEstimator, FilingStatus};
//!
//! let estimator = FederalTaxEstimator::default();
//!
//! // Single filer, $50,000 in the base year: third bracket,
//! // 5226.25 + 25% of the income above 37,950.
//! let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(50000));
//! assert_eq!(tax, dec!(8238.75));
//!
//! // Joint filers, $100,000 in the base year.
//! let tax = estimator.estimate(FilingStatus::Joint, 2017, dec!(100000));
//! assert_eq!(tax, dec!(16477.50));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::calculations::inflation::InflationAdjuster;
use crate::models::{FilingStatus, TaxBracket};

/// Calendar year the embedded rate schedules are anchored to.
pub const SCHEDULE_BASE_YEAR: i32 = 2017;

/// The 2017 rate schedule for a filing status, in base-year dollars.
fn base_schedule(status: FilingStatus) -> Vec<TaxBracket> {
    match status {
        FilingStatus::Single => vec![
            TaxBracket {
                lower_bound: dec!(0),
                upper_bound: Some(dec!(9325)),
                base_tax: dec!(0),
                rate: dec!(0.10),
            },
            TaxBracket {
                lower_bound: dec!(9325),
                upper_bound: Some(dec!(37950)),
                base_tax: dec!(932.50),
                rate: dec!(0.15),
            },
            TaxBracket {
                lower_bound: dec!(37950),
                upper_bound: Some(dec!(91900)),
                base_tax: dec!(5226.25),
                rate: dec!(0.25),
            },
            TaxBracket {
                lower_bound: dec!(91900),
                upper_bound: Some(dec!(191650)),
                base_tax: dec!(18713.75),
                rate: dec!(0.28),
            },
            TaxBracket {
                lower_bound: dec!(191650),
                upper_bound: Some(dec!(416700)),
                base_tax: dec!(46643.75),
                rate: dec!(0.33),
            },
            TaxBracket {
                lower_bound: dec!(416700),
                upper_bound: Some(dec!(418400)),
                base_tax: dec!(120910.25),
                rate: dec!(0.35),
            },
            TaxBracket {
                lower_bound: dec!(418400),
                upper_bound: None,
                base_tax: dec!(121505.25),
                rate: dec!(0.396),
            },
        ],
        FilingStatus::Joint => vec![
            TaxBracket {
                lower_bound: dec!(0),
                upper_bound: Some(dec!(18650)),
                base_tax: dec!(0),
                rate: dec!(0.10),
            },
            TaxBracket {
                lower_bound: dec!(18650),
                upper_bound: Some(dec!(75900)),
                base_tax: dec!(1865.00),
                rate: dec!(0.15),
            },
            TaxBracket {
                lower_bound: dec!(75900),
                upper_bound: Some(dec!(153100)),
                base_tax: dec!(10452.50),
                rate: dec!(0.25),
            },
            TaxBracket {
                lower_bound: dec!(153100),
                upper_bound: Some(dec!(233350)),
                base_tax: dec!(29752.50),
                rate: dec!(0.28),
            },
            TaxBracket {
                lower_bound: dec!(233350),
                upper_bound: Some(dec!(416700)),
                base_tax: dec!(52222.50),
                rate: dec!(0.33),
            },
            TaxBracket {
                lower_bound: dec!(416700),
                upper_bound: Some(dec!(470700)),
                base_tax: dec!(112728.00),
                rate: dec!(0.35),
            },
            TaxBracket {
                lower_bound: dec!(470700),
                upper_bound: None,
                base_tax: dec!(131628.00),
                rate: dec!(0.396),
            },
        ],
    }
}

/// Estimator for federal income tax over inflation-adjusted bracket schedules.
///
/// Stateless apart from the adjuster parameters: each query rebuilds the
/// bracket table for its (filing status, year) pair, so shared references
/// are safe across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FederalTaxEstimator {
    adjuster: InflationAdjuster,
}

impl FederalTaxEstimator {
    pub fn new(adjuster: InflationAdjuster) -> Self {
        Self { adjuster }
    }

    pub fn adjuster(&self) -> &InflationAdjuster {
        &self.adjuster
    }

    /// Builds the bracket table for a filing status and projection year.
    ///
    /// Every lower bound, upper bound and base tax of the 2017 schedule is
    /// adjusted independently. All of them scale by the same factor, so the
    /// returned brackets stay ascending and contiguous.
    pub fn bracket_table(&self, status: FilingStatus, year: i32) -> Vec<TaxBracket> {
        base_schedule(status)
            .into_iter()
            .map(|bracket| TaxBracket {
                lower_bound: self.adjuster.adjust(year, bracket.lower_bound),
                upper_bound: bracket
                    .upper_bound
                    .map(|upper_bound| self.adjuster.adjust(year, upper_bound)),
                base_tax: self.adjuster.adjust(year, bracket.base_tax),
                rate: bracket.rate,
            })
            .collect()
    }

    /// Estimates the federal tax owed on `income` for the given filing
    /// status and year, rounded to cents.
    ///
    /// Bracket selection treats lower bounds as inclusive: the applicable
    /// bracket is the last one whose lower bound does not exceed the income,
    /// so an income exactly on a threshold lands in the higher bracket. The
    /// tax function is continuous across thresholds, so the cent value is
    /// the same either way. Incomes below the bottom bracket (negative)
    /// yield zero tax.
    pub fn estimate(&self, status: FilingStatus, year: i32, income: Decimal) -> Decimal {
        let table = self.bracket_table(status, year);

        // The bottom bracket starts at zero, so only a negative income can
        // fall through this search.
        match table
            .iter()
            .rev()
            .find(|bracket| income >= bracket.lower_bound)
        {
            Some(bracket) => {
                let marginal_income = income - bracket.lower_bound;
                round_half_up(bracket.base_tax + marginal_income * bracket.rate)
            }
            None => {
                warn!(%income, "income below the bottom bracket; estimating zero tax");
                Decimal::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// Initializes tracing subscriber for tests that exercise warning paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // Base schedule invariants
    // =========================================================================

    #[test]
    fn base_schedules_have_seven_brackets() {
        assert_eq!(base_schedule(FilingStatus::Single).len(), 7);
        assert_eq!(base_schedule(FilingStatus::Joint).len(), 7);
    }

    #[test]
    fn base_schedules_start_at_zero_and_end_unbounded() {
        for status in [FilingStatus::Single, FilingStatus::Joint] {
            let schedule = base_schedule(status);

            assert_eq!(schedule[0].lower_bound, dec!(0));
            assert_eq!(schedule[6].upper_bound, None);
            assert!(
                schedule[..6].iter().all(|b| b.upper_bound.is_some()),
                "only the top bracket may be unbounded"
            );
        }
    }

    #[test]
    fn base_schedule_base_taxes_match_the_cumulative_tax_below() {
        for status in [FilingStatus::Single, FilingStatus::Joint] {
            let schedule = base_schedule(status);

            let mut cumulative = dec!(0);
            for bracket in &schedule {
                assert_eq!(
                    bracket.base_tax, cumulative,
                    "{status:?} bracket starting at {} is inconsistent",
                    bracket.lower_bound
                );
                if let Some(upper_bound) = bracket.upper_bound {
                    cumulative += bracket.rate * (upper_bound - bracket.lower_bound);
                }
            }
        }
    }

    #[test]
    fn base_schedules_share_the_marginal_rate_sequence() {
        let rates = [
            dec!(0.10),
            dec!(0.15),
            dec!(0.25),
            dec!(0.28),
            dec!(0.33),
            dec!(0.35),
            dec!(0.396),
        ];

        for status in [FilingStatus::Single, FilingStatus::Joint] {
            let schedule = base_schedule(status);

            for (bracket, rate) in schedule.iter().zip(rates) {
                assert_eq!(bracket.rate, rate);
            }
        }
    }

    // =========================================================================
    // bracket_table tests
    // =========================================================================

    #[test]
    fn bracket_table_at_the_base_year_matches_the_base_schedule() {
        let estimator = FederalTaxEstimator::default();

        let table = estimator.bracket_table(FilingStatus::Single, SCHEDULE_BASE_YEAR);

        assert_eq!(table, base_schedule(FilingStatus::Single));
    }

    #[test]
    fn bracket_table_scales_every_dollar_figure_forward() {
        let estimator = FederalTaxEstimator::default();

        let table = estimator.bracket_table(FilingStatus::Joint, 2018);

        assert_eq!(table[2].lower_bound, dec!(77418));
        assert_eq!(table[2].upper_bound, Some(dec!(156162)));
        assert_eq!(table[2].base_tax, dec!(10661.55));
        assert_eq!(table[2].rate, dec!(0.25));
    }

    #[test]
    fn bracket_table_discounts_past_years() {
        let estimator = FederalTaxEstimator::default();

        let table = estimator.bracket_table(FilingStatus::Single, 2016);

        assert_eq!(table[1].lower_bound, dec!(9138.50));
        assert_eq!(table[1].upper_bound, Some(dec!(37191.00)));
        assert_eq!(table[1].base_tax, dec!(913.85));
    }

    #[test]
    fn adjusted_tables_stay_ascending_and_contiguous() {
        let estimator = FederalTaxEstimator::default();

        for status in [FilingStatus::Single, FilingStatus::Joint] {
            for year in [2016, 2017, 2025, 2047] {
                let table = estimator.bracket_table(status, year);

                for pair in table.windows(2) {
                    assert_eq!(
                        pair[0].upper_bound,
                        Some(pair[1].lower_bound),
                        "{status:?} {year} table is not contiguous"
                    );
                }
            }
        }
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_single_filer_mid_bracket_base_year() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(50000));

        // 5226.25 + 0.25 * (50000 - 37950)
        assert_eq!(tax, dec!(8238.75));
    }

    #[test]
    fn estimate_joint_filers_mid_bracket_base_year() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Joint, 2017, dec!(100000));

        // 10452.50 + 0.25 * (100000 - 75900)
        assert_eq!(tax, dec!(16477.50));
    }

    #[test]
    fn estimate_bottom_bracket_taxes_the_whole_income() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(5000));

        assert_eq!(tax, dec!(500.00));
    }

    #[test]
    fn estimate_top_bracket_has_no_upper_bound() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(500000));

        // 121505.25 + 0.396 * (500000 - 418400)
        assert_eq!(tax, dec!(153818.85));
    }

    #[test]
    fn estimate_against_a_discounted_past_year_table() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2016, dec!(20000));

        // Second bracket after one year of 2% discounting:
        // 913.85 + 0.15 * (20000 - 9138.50)
        assert_eq!(tax, dec!(2543.08));
    }

    #[test]
    fn estimate_income_on_a_threshold_uses_the_higher_bracket() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(9325));

        // 932.50 + 0.15 * 0, identical to taxing 9325 entirely at 10%.
        assert_eq!(tax, dec!(932.50));
    }

    #[test]
    fn estimate_is_continuous_across_thresholds() {
        let estimator = FederalTaxEstimator::default();
        let table = estimator.bracket_table(FilingStatus::Joint, 2024);
        let threshold = table[3].lower_bound;

        let below = estimator.estimate(FilingStatus::Joint, 2024, threshold - dec!(0.01));
        let at = estimator.estimate(FilingStatus::Joint, 2024, threshold);

        assert!(at - below <= dec!(0.01), "jump of {} at {threshold}", at - below);
    }

    #[test]
    fn exactly_one_bracket_contains_each_non_negative_income() {
        let estimator = FederalTaxEstimator::default();
        let table = estimator.bracket_table(FilingStatus::Joint, 2030);

        for income in [dec!(0), dec!(18650), dec!(99999.99), dec!(2000000)] {
            let matching = table.iter().filter(|b| b.contains(income)).count();

            assert_eq!(matching, 1, "income {income} matched {matching} brackets");
        }
    }

    #[test]
    fn estimate_zero_income_owes_zero_tax() {
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Single, 2017, dec!(0));

        assert_eq!(tax, dec!(0));
    }

    #[test]
    fn estimate_negative_income_owes_zero_tax() {
        let _guard = init_test_tracing();
        let estimator = FederalTaxEstimator::default();

        let tax = estimator.estimate(FilingStatus::Joint, 2017, dec!(-1200));

        assert_eq!(tax, Decimal::ZERO);
    }

    #[test]
    fn estimate_uses_the_adjusters_parameters() {
        let estimator = FederalTaxEstimator::new(InflationAdjuster::new(2017, dec!(0)));

        // Zero rate: the 2047 table equals the base schedule.
        let tax = estimator.estimate(FilingStatus::Single, 2047, dec!(50000));

        assert_eq!(tax, dec!(8238.75));
    }
}
