use tracing::debug;

use super::{Amount, Transaction, TransactionKind};

/// The transactions of the single active user.
/// Both sequences are append-only and keep insertion order. Totals are
/// always derived from them, never stored.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_income(&mut self, transaction: Transaction) {
        self.record(TransactionKind::Income, transaction);
    }

    pub fn add_expense(&mut self, transaction: Transaction) {
        self.record(TransactionKind::Expense, transaction);
    }

    /// Append a transaction to the sequence selected by `kind`.
    pub fn record(&mut self, kind: TransactionKind, transaction: Transaction) {
        debug!(
            %kind,
            description = transaction.description(),
            amount = %transaction.amount(),
            "recording transaction"
        );
        match kind {
            TransactionKind::Income => self.incomes.push(transaction),
            TransactionKind::Expense => self.expenses.push(transaction),
        }
    }

    pub fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    /// Descriptions of income transactions, in insertion order.
    /// Amounts are not part of this view.
    pub fn income_descriptions(&self) -> Vec<String> {
        descriptions(&self.incomes)
    }

    /// Descriptions of expense transactions, in insertion order.
    pub fn expense_descriptions(&self) -> Vec<String> {
        descriptions(&self.expenses)
    }

    pub fn total_income(&self) -> Amount {
        total(&self.incomes)
    }

    pub fn total_expenses(&self) -> Amount {
        total(&self.expenses)
    }

    /// Total income minus total expenses. Negative when overspent.
    pub fn remaining_budget(&self) -> Amount {
        self.total_income().saturating_sub(self.total_expenses())
    }

    /// Number of recorded transactions on both sides.
    pub fn len(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }
}

fn descriptions(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.description().to_string())
        .collect()
}

// Saturates at the bounds of `Decimal`. Amounts that passed `parse_amount` never get there.
fn total(transactions: &[Transaction]) -> Amount {
    transactions
        .iter()
        .fold(Amount::ZERO, |acc, t| acc.saturating_add(t.amount()))
}
