//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::Settings;
use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.get(),
            date: expense.date.format(&settings.date_format).to_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            category: expense.category.clone(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(3), Alignment::right());

    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn expense(id: u32, description: &str, cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description,
            Money::from_cents(cents),
            Some(category),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], &Settings::default()),
            "No expenses found."
        );
    }

    #[test]
    fn test_table_rows_in_order() {
        let expenses = vec![
            expense(1, "Groceries", 5000, "Food"),
            expense(2, "Gas", 3000, "Transportation"),
        ];
        let table = format_expense_table(&expenses, &Settings::default());

        for header in ["ID", "Date", "Description", "Amount", "Category"] {
            assert!(table.contains(header), "missing header {}", header);
        }
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("$50.00"));
        assert!(table.contains("$30.00"));

        let groceries = table.find("Groceries").unwrap();
        let gas = table.find("Gas").unwrap();
        assert!(groceries < gas);
    }

    #[test]
    fn test_table_uses_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let table = format_expense_table(&[expense(1, "Bread", 250, "Food")], &settings);

        assert!(table.contains("€2.50"));
        assert!(table.contains("15/01/2025"));
    }

    #[test]
    fn test_details() {
        let details = format_expense_details(&expense(3, "Movie", 1200, "Fun"), &Settings::default());

        assert!(details.contains("Expense:     #3"));
        assert!(details.contains("Description: Movie"));
        assert!(details.contains("Amount:      $12.00"));
        assert!(details.contains("Category:    Fun"));
    }
}
