use serde::Serialize;

use crate::domain::{Amount, Ledger};

/// Everything the budget view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub income_descriptions: Vec<String>,
    pub expense_descriptions: Vec<String>,
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub remaining_budget: Amount,
}

impl BudgetSummary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            income_descriptions: ledger.income_descriptions(),
            expense_descriptions: ledger.expense_descriptions(),
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            remaining_budget: ledger.remaining_budget(),
        }
    }
}
