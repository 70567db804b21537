//! Budget threshold check

use chrono::{Datelike, NaiveDate};
use log::info;

use super::summary::total;
use crate::models::{filter_by_month, Expense, Money};

/// Spending in a month went past the budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    /// Calendar month checked (1-12)
    pub month: u32,
    /// Spending in that month
    pub total: Money,
    /// Configured budget
    pub budget: Money,
}

impl BudgetWarning {
    /// How far spending is over the budget
    pub fn overage(&self) -> Money {
        self.total - self.budget
    }
}

/// Compare one month's spending against the budget
///
/// The month checked is `month` (already validated to 1-12) or, when absent,
/// the month of `today`. Returns `None` when no budget is set or spending does
/// not strictly exceed it.
pub fn budget_warning<'a, I>(
    records: I,
    budget: Option<Money>,
    month: Option<u32>,
    today: NaiveDate,
) -> Option<BudgetWarning>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let budget = budget?;
    let month = month.unwrap_or_else(|| today.month());

    let spent = total(filter_by_month(records, month));
    if spent > budget {
        info!("Spending {} for month {} exceeds budget {}", spent, month, budget);
        Some(BudgetWarning {
            month,
            total: spent,
            budget,
        })
    } else {
        None
    }
}
