//! Cycle-interval gating: which months a cyclic expense actually bills in,
//! and what it costs in a given month.

use rust_decimal::Decimal;

use crate::cyclic::CyclicExpense;
use crate::month::AccountingMonth;
use crate::types::Money;

/// Whether `expense` bills in `month`.
///
/// Requires the expense to be active and to have a resolvable rate for the
/// month. The billing cadence is anchored at the resolved rate's start
/// month: the expense bills when a whole number of cycle intervals has
/// elapsed since then. A rate change re-anchors the cycle phase to the new
/// version's start month.
pub fn applies(expense: &CyclicExpense, month: AccountingMonth) -> bool {
    if !expense.active {
        return false;
    }
    let Some(rate) = expense.rate_for(month) else {
        return false;
    };
    if expense.cycle_interval == 0 {
        // Bad data; validation prevents this upstream. Never bills.
        return false;
    }

    let elapsed = month.months_since(rate.start_month());
    elapsed >= 0 && elapsed % i64::from(expense.cycle_interval) == 0
}

/// The resolved rate's amount for `month`, or zero when no rate resolves.
///
/// Does not consult [`applies`]; gating is a separate decision made by the
/// caller before including the amount.
pub fn amount_for_month(expense: &CyclicExpense, month: AccountingMonth) -> Money {
    expense
        .rate_for(month)
        .map(|rate| rate.amount)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cyclic::CyclicExpenseRate;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> AccountingMonth {
        AccountingMonth::new(y, m).unwrap()
    }

    fn quarterly_insurance() -> CyclicExpense {
        CyclicExpense::new(
            "Insurance",
            3,
            None,
            CyclicExpenseRate::new(dec!(300.00), date(2026, 1, 1)).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_monthly_expense_applies_every_month() {
        let expense = CyclicExpense::new(
            "Rent",
            1,
            None,
            CyclicExpenseRate::new(dec!(1200.00), date(2026, 1, 1)).unwrap(),
        )
        .unwrap();

        for m in 1..=12 {
            assert!(applies(&expense, month(2026, m)), "month {m}");
        }
    }

    #[test]
    fn test_quarterly_cycle_gating() {
        let expense = quarterly_insurance();

        assert!(applies(&expense, month(2026, 1)));
        assert!(applies(&expense, month(2026, 4)));
        assert!(applies(&expense, month(2026, 7)));
        assert!(applies(&expense, month(2026, 10)));

        assert!(!applies(&expense, month(2026, 2)));
        assert!(!applies(&expense, month(2026, 3)));
        assert!(!applies(&expense, month(2026, 5)));
        assert!(!applies(&expense, month(2026, 12)));

        // The phase carries across year boundaries.
        assert!(applies(&expense, month(2027, 1)));
    }

    #[test]
    fn test_rate_change_reanchors_cycle_phase() {
        let mut expense = quarterly_insurance();
        expense.add_rate(CyclicExpenseRate::new(dec!(320.00), date(2025, 7, 1)).unwrap());

        // The new version anchors at July: bills Jul, Oct, Jan, Apr.
        assert!(applies(&expense, month(2025, 7)));
        assert!(applies(&expense, month(2025, 10)));
        assert!(applies(&expense, month(2026, 1)));
        assert!(applies(&expense, month(2026, 4)));

        assert!(!applies(&expense, month(2025, 8)));
        assert!(!applies(&expense, month(2026, 3)));
    }

    #[test]
    fn test_does_not_apply_before_rate_starts() {
        let expense = quarterly_insurance();
        assert!(!applies(&expense, month(2025, 10)));
        assert!(!applies(&expense, month(2025, 12)));
    }

    #[test]
    fn test_inactive_expense_never_applies() {
        let mut expense = quarterly_insurance();
        expense.active = false;
        assert!(!applies(&expense, month(2026, 1)));
    }

    #[test]
    fn test_zero_cycle_interval_never_applies() {
        let mut expense = quarterly_insurance();
        expense.cycle_interval = 0;
        assert!(!applies(&expense, month(2026, 1)));
    }

    #[test]
    fn test_no_resolvable_rate_never_applies() {
        let mut expense = quarterly_insurance();
        expense.rates[0].active = false;
        assert!(!applies(&expense, month(2026, 1)));
    }

    #[test]
    fn test_amount_for_month() {
        let mut expense = quarterly_insurance();
        expense.add_rate(CyclicExpenseRate::new(dec!(320.00), date(2026, 6, 1)).unwrap());

        assert_eq!(amount_for_month(&expense, month(2026, 7)), dec!(320.00));
        // No rate resolves before the active version starts.
        assert_eq!(amount_for_month(&expense, month(2026, 5)), Decimal::ZERO);

        // Amount is available even in months the expense does not bill in;
        // gating is the caller's call.
        assert!(!applies(&expense, month(2026, 8)));
        assert_eq!(amount_for_month(&expense, month(2026, 8)), dec!(320.00));
    }
}
