//! CSV Export functionality
//!
//! Writes the expense list as `ID,Date,Description,Amount,Category`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Export expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.rounded()),
                expense.category.clone(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Export expenses to a CSV file at `path`
pub fn export_expenses_to_path(expenses: &[Expense], path: &Path) -> LedgerResult<usize> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(expenses, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn expense(id: u32, description: &str, amount: Money, category: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description,
            amount,
            Some(category),
        )
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        let mut out = Vec::new();
        let rows = export_expenses_csv(&[], &mut out).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(
            String::from_utf8(out).unwrap().trim_end(),
            "ID,Date,Description,Amount,Category"
        );
    }

    #[test]
    fn test_export_rows() {
        let expenses = vec![
            expense(1, "Groceries", Money::new(dec!(50)), "Food"),
            expense(2, "Gas", Money::new(dec!(30.5)), "Transportation"),
        ];
        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,Date,Description,Amount,Category",
                "1,2025-01-15,Groceries,50.00,Food",
                "2,2025-01-15,Gas,30.50,Transportation",
            ]
        );
    }

    #[test]
    fn test_export_quotes_special_characters() {
        let expenses = vec![expense(1, "Dinner, \"fancy\"", Money::new(dec!(80)), "Food")];
        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1,2025-01-15,\"Dinner, \"\"fancy\"\"\",80.00,Food"));
    }

    #[test]
    fn test_export_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let expenses = vec![expense(1, "Book", Money::new(dec!(15)), "Education")];

        let rows = export_expenses_to_path(&expenses, &path).unwrap();
        assert_eq!(rows, 1);

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][2], "Book");
        assert_eq!(&records[0][3], "15.00");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no").join("such").join("out.csv");

        let err = export_expenses_to_path(&[], &path).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
