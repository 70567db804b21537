//! Service layer for the expense ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! wrapping each ledger operation in a load-mutate-save cycle.

pub mod expense;

pub use expense::ExpenseService;
