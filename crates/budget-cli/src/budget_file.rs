use serde::Deserialize;

use budget_core::cyclic::CyclicExpense;
use budget_core::{Expense, MonthlyFunds, MonthlySavings};

/// The on-disk budget data the CLI feeds into the engine: the same records
/// a persistence layer would hold, as one JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetFile {
    /// Funds records, at most one effective per (year, month).
    #[serde(default)]
    pub funds: Vec<MonthlyFunds>,
    /// The single standing savings record, if any.
    #[serde(default)]
    pub savings: Option<MonthlySavings>,
    #[serde(default)]
    pub cyclic_expenses: Vec<CyclicExpense>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl BudgetFile {
    /// The funds record for a (year, month), if one exists. The first match
    /// wins; keeping the file down to one record per period is the file
    /// author's job.
    pub fn funds_for(&self, year: i32, month: u32) -> Option<MonthlyFunds> {
        self.funds
            .iter()
            .find(|f| f.year == year && f.month == month)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let json = r#"{
            "funds": [
                { "year": 2026, "month": 2, "amount": "5000.00" },
                { "year": 2026, "month": 3, "amount": "5200.00" }
            ],
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
        }"#;

        let file: BudgetFile = serde_json::from_str(json).unwrap();
        assert!(file.funds_for(2026, 2).is_some());
        assert!(file.funds_for(2026, 4).is_none());
        assert_eq!(file.cyclic_expenses.len(), 1);
        assert_eq!(file.expenses.len(), 1);
        assert!(file.savings.is_some());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let file: BudgetFile = serde_json::from_str("{}").unwrap();
        assert!(file.funds.is_empty());
        assert!(file.savings.is_none());
        assert!(file.cyclic_expenses.is_empty());
        assert!(file.expenses.is_empty());
    }
}
