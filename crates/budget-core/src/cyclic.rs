use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::month::AccountingMonth;
use crate::types::Money;
use crate::BudgetResult;

/// One version of the cost of a cyclic expense. New versions supersede old
/// ones from their `valid_from` date onward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclicExpenseRate {
    pub amount: Money,
    pub valid_from: NaiveDate,
    pub active: bool,
}

impl CyclicExpenseRate {
    pub fn new(amount: Money, valid_from: NaiveDate) -> BudgetResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput {
                field: "amount".into(),
                reason: "rate amount must be > 0".into(),
            });
        }
        Ok(CyclicExpenseRate {
            amount,
            valid_from,
            active: true,
        })
    }

    /// The accounting month in which this rate version starts. Each version
    /// anchors its own billing cycle here.
    pub fn start_month(&self) -> AccountingMonth {
        AccountingMonth::from_date(self.valid_from)
    }
}

/// A named recurring obligation billing every `cycle_interval` months.
///
/// Owns its rate-version history by value; deleting the expense drops all
/// of its rates with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclicExpense {
    pub name: String,
    /// Months between occurrences; 1 = every month, 3 = quarterly.
    pub cycle_interval: u32,
    /// Informational cap on the number of occurrences. Never enforced by
    /// the calculation engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cycles: Option<u32>,
    pub active: bool,
    pub rates: Vec<CyclicExpenseRate>,
}

impl CyclicExpense {
    /// Creates the expense together with its initial rate version.
    pub fn new(
        name: impl Into<String>,
        cycle_interval: u32,
        total_cycles: Option<u32>,
        initial_rate: CyclicExpenseRate,
    ) -> BudgetResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BudgetError::InvalidInput {
                field: "name".into(),
                reason: "cyclic expense name cannot be blank".into(),
            });
        }
        if cycle_interval < 1 {
            return Err(BudgetError::InvalidInput {
                field: "cycle_interval".into(),
                reason: "cycle interval must be at least 1 month".into(),
            });
        }
        if let Some(cycles) = total_cycles {
            if cycles < 1 {
                return Err(BudgetError::InvalidInput {
                    field: "total_cycles".into(),
                    reason: "total cycles must be at least 1".into(),
                });
            }
        }
        Ok(CyclicExpense {
            name,
            cycle_interval,
            total_cycles,
            active: true,
            rates: vec![initial_rate],
        })
    }

    /// The rate version in force at the end of `month`, or `None`.
    ///
    /// Among versions that are active and started on or before the month's
    /// last day, the one with the latest `valid_from` wins. When two active
    /// versions share the same `valid_from`, the one added last wins; the
    /// write path in [`add_rate`](Self::add_rate) deactivates prior versions,
    /// so that tie only arises from hand-built or legacy data.
    pub fn rate_for(&self, month: AccountingMonth) -> Option<&CyclicExpenseRate> {
        let cutoff = month.last_day();
        self.rates
            .iter()
            .filter(|rate| rate.active && rate.valid_from <= cutoff)
            .max_by_key(|rate| rate.valid_from)
    }

    /// Records a price change: deactivates every existing version, then
    /// appends `rate` as the single active one.
    pub fn add_rate(&mut self, mut rate: CyclicExpenseRate) {
        for existing in &mut self.rates {
            existing.active = false;
        }
        rate.active = true;
        self.rates.push(rate);
    }
}
