//! Expense model
//!
//! A single dated expense entry, plus the input types used to create and
//! edit one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Category assigned when none is given
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sequential expense identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Wrap a raw id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The id that follows this one, or `None` once `u32::MAX` is used
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ExpenseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the expense was recorded; never changes after creation
    pub date: NaiveDate,

    /// Free-form description
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Category name, never empty
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Expense {
    /// Create an expense. An empty category becomes "Uncategorized".
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Option<&str>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: normalize_category(category),
        }
    }

    /// Calendar month (1-12) the expense was recorded in
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Check if this expense belongs to the given category (exact match)
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} [{}]",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Trim a category name, falling back to "Uncategorized" when blank
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNCATEGORIZED.to_string(),
    }
}

/// Input for recording a new expense
///
/// The amount stays raw text until the ledger validates it.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub category: Option<String>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Partial edit of an existing expense
///
/// `None` leaves a field unchanged. `Some` replaces it, including
/// `Some("0")` for the amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check if the update carries no changes
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}
