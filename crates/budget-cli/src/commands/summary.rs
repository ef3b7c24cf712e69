use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use serde_json::Value;

use budget_core::daily_limit;
use budget_core::summary::{self, MonthlySummaryInput};
use budget_core::AccountingMonth;

use crate::budget_file::BudgetFile;
use crate::input;

/// Arguments for the monthly summary
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to the JSON budget file
    #[arg(long)]
    pub input: Option<String>,

    /// Year of the as-of date (required if month or day is given)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month 1-12 of the as-of date (required if year or day is given)
    #[arg(long)]
    pub month: Option<u32>,

    /// Day of month of the as-of date (defaults to 1 when year/month given)
    #[arg(long)]
    pub day: Option<u32>,
}

/// Arguments for the daily limit breakdown
#[derive(Args)]
pub struct DailyLimitArgs {
    /// Path to the JSON budget file
    #[arg(long)]
    pub input: Option<String>,

    /// Year
    #[arg(long)]
    pub year: i32,

    /// Month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Day of month (1-31); defaults to today when it falls in the
    /// requested month, otherwise to day 1
    #[arg(long)]
    pub date: Option<u32>,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget = load_budget(args.input.as_deref())?;
    let request_date = resolve_summary_date(args.year, args.month, args.day)?;

    let output = summary::calculate(&build_input(&budget, request_date)?)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_daily_limit(args: DailyLimitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget = load_budget(args.input.as_deref())?;
    let request_date = resolve_day_in_month(args.year, args.month, args.date)?;

    // Available amount comes from the full summary for the requested month.
    let output = summary::calculate(&build_input(&budget, request_date)?)?;
    let breakdown = daily_limit::breakdown(output.result.available, request_date);
    Ok(serde_json::to_value(breakdown)?)
}

fn load_budget(path: Option<&str>) -> Result<BudgetFile, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Err("--input <file.json> or stdin required for budget data".into())
}

/// Assemble the engine input for a request date: the funds record for that
/// date's month, the standing savings record, and every expense record.
/// The engine does its own month and as-of filtering.
fn build_input(
    budget: &BudgetFile,
    request_date: NaiveDate,
) -> Result<MonthlySummaryInput, Box<dyn std::error::Error>> {
    let month = AccountingMonth::new(request_date.year(), request_date.month())?;
    Ok(MonthlySummaryInput {
        month,
        funds: budget.funds_for(request_date.year(), request_date.month()),
        savings: budget.savings.clone(),
        cyclic_expenses: budget.cyclic_expenses.clone(),
        expenses: budget.expenses.clone(),
        request_date,
    })
}

/// Date resolution for `summary`: no components means today; otherwise year
/// and month are required and the day defaults to 1.
fn resolve_summary_date(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    if year.is_none() && month.is_none() && day.is_none() {
        return Ok(Local::now().date_naive());
    }

    let (Some(year), Some(month)) = (year, month) else {
        return Err("if specifying a date, both --year and --month are required".into());
    };
    let day = day.unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("invalid date: year={year}, month={month}, day={day}").into())
}

/// Date resolution for `daily-limit`: today when it falls inside the
/// requested month, day 1 otherwise, unless a day was given explicitly.
fn resolve_day_in_month(
    year: i32,
    month: u32,
    day: Option<u32>,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    let day = match day {
        Some(d) => d,
        None => {
            let today = Local::now().date_naive();
            if today.year() == year && today.month() == month {
                today.day()
            } else {
                1
            }
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("invalid date: year={year}, month={month}, day={day}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_budget() -> BudgetFile {
        serde_json::from_str(
            r#"{
                "funds": [ { "year": 2026, "month": 2, "amount": "5000.00" } ],
                "savings": { "amount": "1000.00" },
                "cyclic_expenses": [
                    {
                        "name": "Rent",
                        "cycle_interval": 1,
                        "active": true,
                        "rates": [
                            { "amount": "1500.00", "valid_from": "2026-01-01", "active": true }
                        ]
                    }
                ],
                "expenses": [
                    { "amount": "100.00", "category": "groceries", "spent_at": "2026-02-05" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_input_selects_funds_for_month() {
        let budget = sample_budget();
        let date = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        let input = build_input(&budget, date).unwrap();
        assert!(input.funds.is_some());

        let other = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let input = build_input(&budget, other).unwrap();
        assert!(input.funds.is_none());
    }

    #[test]
    fn test_summary_from_budget_file() {
        let budget = sample_budget();
        let date = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        let output = summary::calculate(&build_input(&budget, date).unwrap()).unwrap();
        assert_eq!(output.result.available, dec!(2400.00));
        assert_eq!(output.result.daily_limit, dec!(100.00));
    }

    #[test]
    fn test_resolve_summary_date_rules() {
        // Year without month is rejected.
        assert!(resolve_summary_date(Some(2026), None, None).is_err());
        // Day defaults to 1.
        assert_eq!(
            resolve_summary_date(Some(2026), Some(2), None).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(
            resolve_summary_date(Some(2026), Some(2), Some(17)).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()
        );
        // Invalid calendar dates are rejected.
        assert!(resolve_summary_date(Some(2026), Some(2), Some(30)).is_err());
    }

    #[test]
    fn test_resolve_day_in_month_explicit_day() {
        assert_eq!(
            resolve_day_in_month(2026, 3, Some(17)).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 17).unwrap()
        );
        assert!(resolve_day_in_month(2026, 2, Some(31)).is_err());
    }
}
