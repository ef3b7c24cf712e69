use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::BudgetResult;

/// Years accepted for budget data. Same bounds the record validation uses,
/// and narrow enough that all date arithmetic below stays in chrono's range.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// A calendar (year, month) unit over which budget figures are aggregated.
///
/// Deserialization runs through [`AccountingMonth::new`], so a decoded
/// value upholds the same month/year bounds as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonth")]
pub struct AccountingMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonth> for AccountingMonth {
    type Error = BudgetError;

    fn try_from(raw: RawMonth) -> BudgetResult<Self> {
        AccountingMonth::new(raw.year, raw.month)
    }
}

impl AccountingMonth {
    pub fn new(year: i32, month: u32) -> BudgetResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(BudgetError::InvalidMonth { year, month });
        }
        Ok(AccountingMonth { year, month })
    }

    /// The accounting month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono guarantees month in 1-12; year bounds only matter for
        // stored records, not for membership checks.
        AccountingMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar length of the month, Gregorian leap years included.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Day 1 of a validated (year, month) always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day() + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Signed whole calendar months from `earlier` to `self`.
    ///
    /// Jan→Feb = 1, Jan→Jan = 0, Feb→Jan = -1. Day-of-month never enters
    /// into it; this is pure (year, month) arithmetic.
    pub fn months_since(&self, earlier: AccountingMonth) -> i64 {
        i64::from(self.year - earlier.year) * 12 + i64::from(self.month) - i64::from(earlier.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
