//! Orchestrates the monthly summary: nets fixed income, savings set-aside,
//! cyclic costs, and ad-hoc spending into one record plus a daily limit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::cyclic::CyclicExpense;
use crate::daily_limit;
use crate::month::AccountingMonth;
use crate::types::{with_metadata, ComputationOutput, Expense, Money, MonthlyFunds, MonthlySavings, MonthlySummary};
use crate::BudgetResult;

/// Everything the summary calculation needs, supplied by the caller.
///
/// The request date is explicit: the engine never reads the wall clock, so
/// identical inputs always produce identical output. Callers that want
/// "today" resolve it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryInput {
    pub month: AccountingMonth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds: Option<MonthlyFunds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<MonthlySavings>,
    pub cyclic_expenses: Vec<CyclicExpense>,
    pub expenses: Vec<Expense>,
    pub request_date: NaiveDate,
}

/// Echoed back in the output envelope's assumptions.
#[derive(Debug, Clone, Serialize)]
struct SummaryAssumptions {
    month: AccountingMonth,
    request_date: NaiveDate,
    cyclic_expense_count: usize,
    expense_count: usize,
}

/// Compute the monthly summary.
///
/// Pure and deterministic: no I/O, no mutation of inputs. Missing funds or
/// savings read as zero — a summary must always be computable even from
/// incomplete data. `available` is not clamped and can go negative; only
/// the daily limit floors at zero.
pub fn calculate(input: &MonthlySummaryInput) -> BudgetResult<ComputationOutput<MonthlySummary>> {
    let mut warnings: Vec<String> = Vec::new();

    let funds_amount = input
        .funds
        .as_ref()
        .map(|f| f.amount)
        .unwrap_or(Decimal::ZERO);
    let savings_amount = input
        .savings
        .as_ref()
        .map(|s| s.amount)
        .unwrap_or(Decimal::ZERO);

    let fixed_costs = fixed_costs(&input.cyclic_expenses, input.month, &mut warnings);
    let spent = spent(&input.expenses, input.month, input.request_date);

    let available = funds_amount - savings_amount - fixed_costs - spent;
    if available < Decimal::ZERO {
        warnings.push(format!("available is negative ({available})"));
    }

    let limit = daily_limit::calculate_from_date(available, input.request_date);

    let summary = MonthlySummary {
        date: input.request_date,
        funds: funds_amount,
        savings: savings_amount,
        fixed_costs,
        spent,
        available,
        daily_limit: limit,
    };

    let assumptions = SummaryAssumptions {
        month: input.month,
        request_date: input.request_date,
        cyclic_expense_count: input.cyclic_expenses.len(),
        expense_count: input.expenses.len(),
    };

    Ok(with_metadata(
        "available = funds - savings - fixed_costs - spent; \
         daily_limit = available / remaining days (round-half-down, 2dp)",
        &assumptions,
        warnings,
        summary,
    ))
}

/// Sum of cyclic expense amounts that bill in `month`.
fn fixed_costs(
    cyclic_expenses: &[CyclicExpense],
    month: AccountingMonth,
    warnings: &mut Vec<String>,
) -> Money {
    let mut total = Decimal::ZERO;
    for expense in cyclic_expenses {
        if expense.active && expense.cycle_interval == 0 {
            warnings.push(format!(
                "cyclic expense '{}' has a zero cycle interval and is skipped",
                expense.name
            ));
        }
        if calculator::applies(expense, month) {
            total += calculator::amount_for_month(expense, month);
        }
    }
    total
}

/// Sum of ad-hoc spending accrued by `as_of` within `month`.
///
/// Expenses dated after the as-of date in the same month are excluded, so
/// a request for an earlier day reads as "what had I spent by then".
fn spent(expenses: &[Expense], month: AccountingMonth, as_of: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.in_month(month) && e.spent_at <= as_of)
        .map(|e| e.amount)
        .sum()
}
