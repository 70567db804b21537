//! expense-ledger - personal expense tracking from the terminal
//!
//! Expenses live in a single JSON document on disk. Every command loads the
//! ledger, applies one change, and writes it back atomically.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: the `LedgerError` type shared by every layer
//! - `models`: money, expenses, the ledger aggregate and input validation
//! - `storage`: the `LedgerStore` seam with JSON file and in-memory backends
//! - `services`: load-mutate-save operations over a store
//! - `reports`: category breakdowns and the monthly budget check
//! - `display`: terminal formatting
//! - `export`: CSV export
//! - `cli`: clap argument types and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::models::NewExpense;
//! use ledger::services::ExpenseService;
//! use ledger::storage::JsonFileStore;
//!
//! let store = JsonFileStore::new("expenses.json");
//! let service = ExpenseService::new(&store);
//! service.add(NewExpense::new("Groceries", "50.00").category("Food"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
