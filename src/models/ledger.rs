//! Ledger model
//!
//! The whole persisted document: every expense in insertion order plus the
//! optional monthly budget. All operations here are pure in-memory edits;
//! loading and saving is the storage layer's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::{normalize_category, Expense, ExpenseId, ExpenseUpdate, NewExpense};
use super::money::Money;
use super::validation::validate_amount;
use crate::error::{LedgerError, LedgerResult};

/// The expense ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Expenses in id-assignment order
    #[serde(default)]
    expenses: Vec<Expense>,

    /// Monthly spending ceiling; `None` disables warnings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<Money>,

    /// Highest id ever handed out, so deleted ids stay retired
    #[serde(default, skip_serializing_if = "is_zero")]
    last_id: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The configured budget, if any
    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Find an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Highest id in use or ever handed out
    fn highest_id(&self) -> u32 {
        self.expenses
            .iter()
            .map(|e| e.id.get())
            .max()
            .unwrap_or(0)
            .max(self.last_id)
    }

    /// The id the next added expense will receive
    ///
    /// # Errors
    ///
    /// Returns `Storage` when every `u32` id has been used.
    pub fn next_id(&self) -> LedgerResult<ExpenseId> {
        let highest = self.highest_id();
        ExpenseId::new(highest)
            .next()
            .ok_or_else(|| LedgerError::Storage(format!("no expense ids left after {}", highest)))
    }

    /// Record a new expense dated `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the amount is not a non-negative number,
    /// or `Storage` if no ids are left. The ledger is unchanged on error.
    pub fn add(&mut self, input: NewExpense, today: NaiveDate) -> LedgerResult<ExpenseId> {
        let amount = validate_amount(&input.amount)?;
        let id = self.next_id()?;

        self.expenses.push(Expense::new(
            id,
            today,
            input.description,
            amount,
            input.category.as_deref(),
        ));
        self.last_id = id.get();

        Ok(id)
    }

    /// Apply a partial update to an existing expense
    ///
    /// The date is never touched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id or `InvalidAmount` for a bad
    /// amount. The ledger is unchanged on error.
    pub fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> LedgerResult<&Expense> {
        let amount = update.amount.as_deref().map(validate_amount).transpose()?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id))?;

        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = update.category {
            expense.category = normalize_category(Some(&category));
        }

        Ok(&*expense)
    }

    /// Remove an expense, returning it
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id))?;

        // Retire the highest id before it can drop out of the list
        self.last_id = self.highest_id();

        Ok(self.expenses.remove(index))
    }

    /// Set the monthly budget
    pub fn set_budget(&mut self, budget: Money) {
        self.budget = Some(budget);
    }

    /// Remove the monthly budget
    pub fn clear_budget(&mut self) {
        self.budget = None;
    }
}

/// Expenses whose category matches exactly (case-sensitive)
pub fn filter_by_category<'a, I>(records: I, category: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    records
        .into_iter()
        .filter(|e| e.is_in_category(category))
        .collect()
}

/// Expenses recorded in the given calendar month (1-12) of any year
pub fn filter_by_month<'a, I>(records: I, month: u32) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    records.into_iter().filter(|e| e.month() == month).collect()
}
