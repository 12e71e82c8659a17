use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income sources for one projection year, as supplied by the planning
/// backend. Spouse fields are zero for single households.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSources {
    pub user_work: Decimal,
    pub spouse_work: Decimal,
    pub user_social_security: Decimal,
    pub spouse_social_security: Decimal,
    pub asset_income: Decimal,
}

impl IncomeSources {
    pub fn total_work(&self) -> Decimal {
        self.user_work + self.spouse_work
    }

    pub fn total_social_security(&self) -> Decimal {
        self.user_social_security + self.spouse_social_security
    }

    pub fn sum(&self) -> Decimal {
        self.total_work() + self.total_social_security() + self.asset_income
    }
}

/// One year of a household projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub start_date: NaiveDate,
    pub sources: IncomeSources,
    /// Combined income as reported by the data source. Kept as supplied,
    /// even when it disagrees with the sum of `sources`.
    pub total: Decimal,
}

impl ProjectionYear {
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}
