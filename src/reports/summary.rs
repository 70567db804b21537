//! Spending Summary
//!
//! Totals and per-category breakdowns over a (possibly filtered) set of
//! expenses.

use chrono::NaiveDate;

use super::budget::{budget_warning, BudgetWarning};
use crate::models::{filter_by_category, filter_by_month, Expense, Ledger, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
}

/// Sum of amounts; zero for no records
pub fn total<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    records.into_iter().map(|e| e.amount).sum()
}

/// Per-category totals in order of each category's first appearance
pub fn category_breakdown<'a, I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for expense in records {
        match breakdown.iter_mut().find(|c| c.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => breakdown.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                count: 1,
            }),
        }
    }

    breakdown
}

/// Filters for a summary; both are optional and combine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryQuery {
    /// Calendar month 1-12, already validated
    pub month: Option<u32>,
    /// Exact category name
    pub category: Option<String>,
}

impl SummaryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Summary Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Month filter applied, if any
    pub month: Option<u32>,
    /// Category filter applied, if any
    pub category: Option<String>,
    /// Total over the filtered expenses
    pub total: Money,
    /// Number of filtered expenses
    pub count: usize,
    /// Per-category totals over the filtered expenses
    pub breakdown: Vec<CategoryTotal>,
    /// Set when the target month's spending is over budget
    pub warning: Option<BudgetWarning>,
}

impl SummaryReport {
    /// Generate a summary for the query
    ///
    /// The budget check looks at all spending in the target month (the
    /// query's month, else `today`'s), ignoring the category filter.
    pub fn generate(ledger: &Ledger, query: &SummaryQuery, today: NaiveDate) -> Self {
        let mut records: Vec<&Expense> = ledger.expenses().iter().collect();

        if let Some(month) = query.month {
            records = filter_by_month(records, month);
        }
        if let Some(category) = &query.category {
            records = filter_by_category(records, category);
        }

        let warning = budget_warning(ledger.expenses(), ledger.budget(), query.month, today);

        Self {
            month: query.month,
            category: query.category.clone(),
            total: total(records.iter().copied()),
            count: records.len(),
            breakdown: category_breakdown(records.iter().copied()),
            warning,
        }
    }
}
