//! Per-year derivation of household cashflow figures.
//!
//! Each supplied [`ProjectionYear`] becomes a [`YearCashflow`]: ages, the
//! work and social-security totals, retirement-account withdrawals, the
//! combined income, and a federal tax estimate on that combined income.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use cashflow_core::{
//!     CashflowCalculator, FederalTaxEstimator, Household, IncomeSources, ProjectionYear,
//! };
//!
//! let household = Household::joint(
//!     NaiveDate::from_ymd_opt(1955, 6, 15).unwrap(),
//!     NaiveDate::from_ymd_opt(1957, 3, 2).unwrap(),
//! );
//! let calculator = CashflowCalculator::new(household, FederalTaxEstimator::default());
//!
//! let year = ProjectionYear {
//!     start_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
//!     sources: IncomeSources {
//!         user_work: dec!(60000),
//!         spouse_work: dec!(25000),
//!         user_social_security: dec!(0),
//!         spouse_social_security: dec!(0),
//!         asset_income: dec!(15000),
//!     },
//!     total: dec!(100000),
//! };
//!
//! let row = calculator.derive_year(&year);
//! assert_eq!(row.user_age, 62);
//! assert_eq!(row.estimated_tax, dec!(16477.50));
//! assert_eq!(row.after_tax_income, dec!(83522.50));
//! ```

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::federal_tax::FederalTaxEstimator;
use crate::models::{Household, ProjectionYear};

/// Derived financial figures for one projection year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCashflow {
    pub year: i32,
    pub user_age: i32,
    /// Present only for a joint household with a spouse birthday on file.
    pub spouse_age: Option<i32>,
    pub user_work_income: Decimal,
    pub spouse_work_income: Decimal,
    pub total_work_income: Decimal,
    pub user_social_security_income: Decimal,
    pub spouse_social_security_income: Decimal,
    pub total_social_security_income: Decimal,
    /// Retirement-account withdrawals for the year.
    pub retirement_income: Decimal,
    pub combined_income: Decimal,
    /// Federal tax estimated on the combined income.
    pub estimated_tax: Decimal,
    pub after_tax_income: Decimal,
}

/// Turns supplied projection years into derived cashflow figures.
#[derive(Debug, Clone)]
pub struct CashflowCalculator {
    household: Household,
    estimator: FederalTaxEstimator,
}

impl CashflowCalculator {
    pub fn new(household: Household, estimator: FederalTaxEstimator) -> Self {
        Self {
            household,
            estimator,
        }
    }

    /// Derives the cashflow figures for a single projection year.
    pub fn derive_year(&self, projection: &ProjectionYear) -> YearCashflow {
        let year = projection.year();
        let combined_income = projection.total;
        let estimated_tax =
            self.estimator
                .estimate(self.household.filing_status(), year, combined_income);

        // Ages are calendar-year differences; birthdays within the year are
        // ignored.
        let user_age = year - self.household.user_birthday.year();
        let spouse_age = if self.household.joint {
            self.household
                .spouse_birthday
                .map(|birthday| year - birthday.year())
        } else {
            None
        };

        YearCashflow {
            year,
            user_age,
            spouse_age,
            user_work_income: projection.sources.user_work,
            spouse_work_income: projection.sources.spouse_work,
            total_work_income: projection.sources.total_work(),
            user_social_security_income: projection.sources.user_social_security,
            spouse_social_security_income: projection.sources.spouse_social_security,
            total_social_security_income: projection.sources.total_social_security(),
            retirement_income: projection.sources.asset_income,
            combined_income,
            estimated_tax,
            after_tax_income: combined_income - estimated_tax,
        }
    }

    /// Derives every supplied year, ordered by ascending calendar year.
    pub fn project(&self, projection: &[ProjectionYear]) -> Vec<YearCashflow> {
        let mut rows: Vec<YearCashflow> = projection
            .iter()
            .map(|year| self.derive_year(year))
            .collect();
        rows.sort_by_key(|row| row.year);
        rows
    }
}
