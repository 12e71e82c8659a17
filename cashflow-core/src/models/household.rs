use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// The people behind a projection: one filer, or a couple filing jointly.
///
/// Birthdays feed the per-year age columns; `joint` selects the joint
/// bracket schedule and the spouse income breakdown. A joint household
/// without a spouse birthday on file is tolerated; the spouse age is
/// simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub user_birthday: NaiveDate,
    pub spouse_birthday: Option<NaiveDate>,
    pub joint: bool,
}

impl Household {
    pub fn single(user_birthday: NaiveDate) -> Self {
        Self {
            user_birthday,
            spouse_birthday: None,
            joint: false,
        }
    }

    pub fn joint(user_birthday: NaiveDate, spouse_birthday: NaiveDate) -> Self {
        Self {
            user_birthday,
            spouse_birthday: Some(spouse_birthday),
            joint: true,
        }
    }

    pub fn filing_status(&self) -> FilingStatus {
        if self.joint {
            FilingStatus::Joint
        } else {
            FilingStatus::Single
        }
    }
}
