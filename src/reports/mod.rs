//! Reports module for the expense ledger
//!
//! Provides the aggregations behind the `summary` command:
//! - Totals and per-category breakdowns
//! - Monthly budget warnings

pub mod budget;
pub mod summary;

pub use budget::{budget_warning, BudgetWarning};
pub use summary::{category_breakdown, total, CategoryTotal, SummaryQuery, SummaryReport};
