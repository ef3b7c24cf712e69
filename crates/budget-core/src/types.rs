use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::month::{AccountingMonth, MAX_YEAR, MIN_YEAR};
use crate::BudgetResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Income available for one (year, month).
///
/// At most one effective record should exist per period; uniqueness is a
/// storage concern, the engine works with whatever single record it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFunds {
    pub year: i32,
    pub month: u32,
    pub amount: Money,
}

impl MonthlyFunds {
    pub fn new(year: i32, month: u32, amount: Money) -> BudgetResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(BudgetError::InvalidMonth { year, month });
        }
        if amount <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput {
                field: "amount".into(),
                reason: "funds amount must be > 0".into(),
            });
        }
        Ok(MonthlyFunds {
            year,
            month,
            amount,
        })
    }

    /// The accounting month this record belongs to.
    pub fn period(&self) -> BudgetResult<AccountingMonth> {
        AccountingMonth::new(self.year, self.month)
    }
}

/// The single standing amount set aside each month (system-wide, not
/// per-month). A missing record reads as zero savings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySavings {
    pub amount: Money,
}

impl MonthlySavings {
    pub fn new(amount: Money) -> BudgetResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput {
                field: "amount".into(),
                reason: "savings amount must be > 0".into(),
            });
        }
        Ok(MonthlySavings { amount })
    }
}

/// An ad-hoc spend, belonging to the calendar month containing its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Money,
    pub category: String,
    pub spent_at: NaiveDate,
}

impl Expense {
    pub fn new(amount: Money, category: impl Into<String>, spent_at: NaiveDate) -> BudgetResult<Self> {
        let category = category.into();
        if amount <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput {
                field: "amount".into(),
                reason: "expense amount must be > 0".into(),
            });
        }
        if category.trim().is_empty() {
            return Err(BudgetError::InvalidInput {
                field: "category".into(),
                reason: "category cannot be blank".into(),
            });
        }
        Ok(Expense {
            amount,
            category,
            spent_at,
        })
    }

    pub fn in_month(&self, month: AccountingMonth) -> bool {
        month.contains(self.spent_at)
    }
}

/// The computed monthly summary. Immutable; recomputed fresh on every
/// request, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub date: NaiveDate,
    pub funds: Money,
    pub savings: Money,
    pub fixed_costs: Money,
    pub spent: Money,
    pub available: Money,
    pub daily_limit: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation.
///
/// Deliberately carries no timing: identical inputs must produce
/// bit-identical envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_funds_validation() {
        assert!(MonthlyFunds::new(2026, 2, dec!(5000)).is_ok());
        assert!(MonthlyFunds::new(2026, 13, dec!(5000)).is_err());
        assert!(MonthlyFunds::new(2026, 2, Decimal::ZERO).is_err());
        assert!(MonthlyFunds::new(2026, 2, dec!(-1)).is_err());
    }

    #[test]
    fn test_monthly_funds_period() {
        let funds = MonthlyFunds::new(2026, 2, dec!(5000)).unwrap();
        assert_eq!(
            funds.period().unwrap(),
            AccountingMonth::new(2026, 2).unwrap()
        );
    }

    #[test]
    fn test_savings_validation() {
        assert!(MonthlySavings::new(dec!(100)).is_ok());
        assert!(MonthlySavings::new(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_expense_validation() {
        assert!(Expense::new(dec!(25.50), "groceries", date(2026, 3, 5)).is_ok());
        assert!(Expense::new(Decimal::ZERO, "groceries", date(2026, 3, 5)).is_err());
        assert!(Expense::new(dec!(25.50), "   ", date(2026, 3, 5)).is_err());
    }

    #[test]
    fn test_expense_in_month() {
        let expense = Expense::new(dec!(10), "coffee", date(2026, 3, 5)).unwrap();
        assert!(expense.in_month(AccountingMonth::new(2026, 3).unwrap()));
        assert!(!expense.in_month(AccountingMonth::new(2026, 4).unwrap()));
    }
}
