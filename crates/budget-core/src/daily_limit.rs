//! Safe per-day spending figures for the days remaining in a month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::month::AccountingMonth;
use crate::types::Money;

/// Round-half-down to 2 decimal places: ties round toward zero, so
/// 0.005 → 0.00. This is deliberately not half-up or banker's rounding;
/// the strategy is always named, never left to a library default.
fn round_limit(amount: Decimal) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointTowardZero)
}

/// Daily limit over the whole month, anchored to day 1.
pub fn calculate(available: Money, month: AccountingMonth) -> Money {
    if available <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_limit(available / Decimal::from(month.days_in_month()))
}

/// Daily limit over the days remaining in the month from `date`,
/// inclusive of that day.
///
/// On the last day of the month one day remains, so the limit is the whole
/// available amount. Returns zero when nothing is available.
pub fn calculate_from_date(available: Money, date: NaiveDate) -> Money {
    if available <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_limit(available / Decimal::from(remaining_days(date)))
}

/// Days left in `date`'s month, counting `date` itself. Never less than 1.
pub fn remaining_days(date: NaiveDate) -> u32 {
    let month = AccountingMonth::from_date(date);
    month.days_in_month() - date.day() + 1
}

/// Full daily-limit picture for a request date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLimitBreakdown {
    pub request_date: NaiveDate,
    pub available: Money,
    pub remaining_days: u32,
    pub days_in_month: u32,
    pub daily_limit: Money,
}

/// The daily limit together with the figures it was derived from.
pub fn breakdown(available: Money, date: NaiveDate) -> DailyLimitBreakdown {
    let month = AccountingMonth::from_date(date);
    DailyLimitBreakdown {
        request_date: date,
        available,
        remaining_days: remaining_days(date),
        days_in_month: month.days_in_month(),
        daily_limit: calculate_from_date(available, date),
    }
}
