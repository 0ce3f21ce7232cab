use tracing::warn;

use crate::domain::{Amount, Ledger, Transaction, TransactionKind};

use super::{validate_transaction, AppError, BudgetSummary};

/// Application service providing the operations the presentation layer needs.
/// The ledger is handed in by the caller and owned here for the session.
#[derive(Debug, Default)]
pub struct BudgetService {
    ledger: Ledger,
}

impl BudgetService {
    /// Create a service over the given ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consume the service, handing the ledger back.
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Validate raw input and record it as income.
    pub fn add_income(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> Result<Transaction, AppError> {
        self.add(TransactionKind::Income, description, amount_text)
    }

    /// Validate raw input and record it as an expense.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> Result<Transaction, AppError> {
        self.add(TransactionKind::Expense, description, amount_text)
    }

    /// Validate raw input and record it on the side given by `kind`.
    /// Rejected input leaves the ledger untouched.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount_text: &str,
    ) -> Result<Transaction, AppError> {
        let transaction = validate_transaction(description, amount_text).inspect_err(|err| {
            warn!(%kind, reason = %err, "rejected transaction input");
        })?;

        self.ledger.record(kind, transaction.clone());
        Ok(transaction)
    }

    pub fn income_descriptions(&self) -> Vec<String> {
        self.ledger.income_descriptions()
    }

    pub fn expense_descriptions(&self) -> Vec<String> {
        self.ledger.expense_descriptions()
    }

    pub fn total_income(&self) -> Amount {
        self.ledger.total_income()
    }

    pub fn total_expenses(&self) -> Amount {
        self.ledger.total_expenses()
    }

    pub fn remaining_budget(&self) -> Amount {
        self.ledger.remaining_budget()
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_ledger(&self.ledger)
    }
}
