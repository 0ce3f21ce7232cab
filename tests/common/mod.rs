// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use budget_tracker::application::BudgetService;
use budget_tracker::domain::{Amount, Ledger, Transaction};
use rust_decimal_macros::dec;

/// Helper to create a service over an empty ledger
pub fn test_service() -> BudgetService {
    BudgetService::new(Ledger::new())
}

/// Test fixture: a typical month
pub struct SampleMonth;

impl SampleMonth {
    pub fn incomes() -> Vec<Transaction> {
        vec![
            Transaction::new("Salary", dec!(2450.00)),
            Transaction::new("Freelance invoice", dec!(380.50)),
            Transaction::new("Interest", dec!(1.27)),
        ]
    }

    pub fn expenses() -> Vec<Transaction> {
        vec![
            Transaction::new("Rent", dec!(950.00)),
            Transaction::new("Groceries", dec!(312.44)),
            Transaction::new("Electricity", dec!(61.30)),
            Transaction::new("Phone", dec!(19.99)),
        ]
    }

    /// Ledger holding the whole month
    pub fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        for income in Self::incomes() {
            ledger.add_income(income);
        }
        for expense in Self::expenses() {
            ledger.add_expense(expense);
        }
        ledger
    }
}

/// Arithmetic sum of the amounts, independent of the ledger
pub fn sum(transactions: &[Transaction]) -> Amount {
    transactions.iter().fold(dec!(0), |acc, t| acc + t.amount())
}
