use std::io::Read;

use cashflow_core::{IncomeSources, ProjectionYear};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when loading projection data.
#[derive(Debug, Error)]
pub enum ProjectionLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for ProjectionLoaderError {
    fn from(err: csv::Error) -> Self {
        ProjectionLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a projection CSV file.
///
/// The CSV format mirrors the planning backend's export:
/// - `start_date`: First day of the projection year (YYYY-MM-DD)
/// - `user_work`: Filer's work income for the year
/// - `spouse_work`: Spouse's work income (empty for single households)
/// - `user_social_security`: Filer's social security income
/// - `spouse_social_security`: Spouse's social security income (empty for
///   single households)
/// - `asset_income`: Retirement-account withdrawals
/// - `total`: Combined income as computed by the backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectionRecord {
    pub start_date: NaiveDate,
    pub user_work: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub spouse_work: Option<Decimal>,
    pub user_social_security: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub spouse_social_security: Option<Decimal>,
    pub asset_income: Decimal,
    pub total: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl ProjectionRecord {
    /// Converts the raw record into a core projection year.
    ///
    /// Blank spouse columns become zero. The reported `total` is kept even
    /// when it disagrees with the sum of the sources; the mismatch is only
    /// logged.
    fn into_projection_year(self) -> ProjectionYear {
        let sources = IncomeSources {
            user_work: self.user_work,
            spouse_work: self.spouse_work.unwrap_or(Decimal::ZERO),
            user_social_security: self.user_social_security,
            spouse_social_security: self.spouse_social_security.unwrap_or(Decimal::ZERO),
            asset_income: self.asset_income,
        };

        if sources.sum() != self.total {
            warn!(
                start_date = %self.start_date,
                reported = %self.total,
                computed = %sources.sum(),
                "projection total does not match the sum of its sources; keeping the reported value"
            );
        }

        ProjectionYear {
            start_date: self.start_date,
            sources,
            total: self.total,
        }
    }
}

/// Loader for household projection data exported as CSV.
pub struct ProjectionLoader;

impl ProjectionLoader {
    /// Parses projection years from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice. Rows keep their file order; sorting by calendar year
    /// happens in the calculator.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ProjectionYear>, ProjectionLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut years = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ProjectionRecord = result?;
            years.push(record.into_projection_year());
        }

        Ok(years)
    }
}
