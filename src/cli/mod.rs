//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod summary;

pub use budget::{handle_clear_budget, handle_set_budget, SetBudgetArgs};
pub use expense::{
    handle_add, handle_delete, handle_list, handle_show, handle_update, AddArgs, IdArgs, ListArgs,
    UpdateArgs,
};
pub use export::{handle_export, ExportArgs};
pub use summary::{handle_summary, SummaryArgs};
