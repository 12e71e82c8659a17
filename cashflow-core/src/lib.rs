pub mod calculations;
pub mod models;

pub use calculations::{CashflowCalculator, FederalTaxEstimator, InflationAdjuster, YearCashflow};
pub use models::*;
