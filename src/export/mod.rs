//! Export module for the expense ledger
//!
//! Provides CSV export of the full expense list (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_to_path, CSV_HEADERS};
