//! Expense service
//!
//! Runs each command as one load-mutate-save cycle against a `LedgerStore`.
//! Errors are returned before anything is saved, so a failed command never
//! leaves a partial write behind.

use chrono::NaiveDate;
use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    filter_by_category, validate_amount, Expense, ExpenseId, ExpenseUpdate, Ledger, Money,
    NewExpense,
};
use crate::reports::{SummaryQuery, SummaryReport};
use crate::storage::LedgerStore;

/// Service for expense management
pub struct ExpenseService<'a, S: LedgerStore> {
    store: &'a S,
    today: Option<NaiveDate>,
}

impl<'a, S: LedgerStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self { store, today: None }
    }

    /// Pin "today" instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Record a new expense
    pub fn add(&self, input: NewExpense) -> LedgerResult<Expense> {
        let mut ledger = self.store.load()?;
        let id = ledger.add(input, self.today())?;
        self.store.save(&ledger)?;

        let expense = lookup(&ledger, id)?.clone();
        info!("Added expense {}", expense);
        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> LedgerResult<Expense> {
        let ledger = self.store.load()?;
        lookup(&ledger, id).cloned()
    }

    /// List expenses, optionally restricted to one category
    pub fn list(&self, category: Option<&str>) -> LedgerResult<Vec<Expense>> {
        let ledger = self.store.load()?;
        let expenses = match category {
            Some(category) => filter_by_category(ledger.expenses(), category)
                .into_iter()
                .cloned()
                .collect(),
            None => ledger.expenses().to_vec(),
        };
        Ok(expenses)
    }

    /// Apply a partial update
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> LedgerResult<Expense> {
        let mut ledger = self.store.load()?;
        let before = lookup(&ledger, id)?.clone();
        if update.is_empty() {
            info!("Updated expense {} (no changes)", id);
            return Ok(before);
        }

        let after = ledger.update(id, update)?.clone();
        self.store.save(&ledger)?;

        let mut changes = Vec::new();
        if before.description != after.description {
            changes.push(format!(
                "description: '{}' -> '{}'",
                before.description, after.description
            ));
        }
        if before.amount != after.amount {
            changes.push(format!("amount: {} -> {}", before.amount, after.amount));
        }
        if before.category != after.category {
            changes.push(format!(
                "category: '{}' -> '{}'",
                before.category, after.category
            ));
        }
        if changes.is_empty() {
            info!("Updated expense {} (no changes)", id);
        } else {
            info!("Updated expense {}: {}", id, changes.join(", "));
        }

        Ok(after)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> LedgerResult<Expense> {
        let mut ledger = self.store.load()?;
        let removed = ledger.delete(id)?;
        self.store.save(&ledger)?;

        info!("Deleted expense {}", removed);
        Ok(removed)
    }

    /// Set the monthly budget from raw input
    pub fn set_budget(&self, raw_amount: &str) -> LedgerResult<Money> {
        let budget = validate_amount(raw_amount)?;

        let mut ledger = self.store.load()?;
        ledger.set_budget(budget);
        self.store.save(&ledger)?;

        info!("Monthly budget set to {}", budget);
        Ok(budget)
    }

    /// Remove the monthly budget, returning the previous value
    pub fn clear_budget(&self) -> LedgerResult<Option<Money>> {
        let mut ledger = self.store.load()?;
        let previous = ledger.budget();
        ledger.clear_budget();
        self.store.save(&ledger)?;

        info!("Monthly budget cleared");
        Ok(previous)
    }

    /// Current budget, if set
    pub fn budget(&self) -> LedgerResult<Option<Money>> {
        Ok(self.store.load()?.budget())
    }

    /// Build a summary report
    pub fn summary(&self, query: &SummaryQuery) -> LedgerResult<SummaryReport> {
        let ledger = self.store.load()?;
        Ok(SummaryReport::generate(&ledger, query, self.today()))
    }
}

fn lookup(ledger: &Ledger, id: ExpenseId) -> LedgerResult<&Expense> {
    ledger
        .get(id)
        .ok_or_else(|| LedgerError::expense_not_found(id))
}
