//! Core data models for the expense ledger
//!
//! This module contains the data structures of the domain: money amounts,
//! expenses, and the ledger that holds them, along with input validation.

pub mod expense;
pub mod ledger;
pub mod money;
pub mod validation;

pub use expense::{Expense, ExpenseId, ExpenseUpdate, NewExpense, UNCATEGORIZED};
pub use ledger::{filter_by_category, filter_by_month, Ledger};
pub use money::Money;
pub use validation::{validate_amount, validate_month, MAX_AMOUNT};
