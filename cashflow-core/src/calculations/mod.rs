//! Calculation modules for the household cashflow projection.
//!
//! This module provides the computational core behind the projection table:
//! inflation adjustment of fixed base-year figures, federal tax estimation
//! over the adjusted bracket schedules, and per-year cashflow derivation.

pub mod cashflow;
pub mod common;
pub mod federal_tax;
pub mod inflation;

pub use cashflow::{CashflowCalculator, YearCashflow};
pub use federal_tax::FederalTaxEstimator;
pub use inflation::InflationAdjuster;
