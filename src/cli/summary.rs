//! CLI command for the spending summary

use clap::Args;

use crate::config::Settings;
use crate::display::{format_budget_warning, format_summary};
use crate::error::LedgerResult;
use crate::models::validate_month;
use crate::reports::SummaryQuery;
use crate::services::ExpenseService;
use crate::storage::LedgerStore;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (1-12); the budget check defaults to the current month
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i64>,
    /// Only include this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `summary`
pub fn handle_summary<S: LedgerStore>(
    store: &S,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let query = SummaryQuery {
        month: args.month.map(validate_month).transpose()?,
        category: args.category,
    };

    let service = ExpenseService::new(store);
    let report = service.summary(&query)?;

    print!("{}", format_summary(&report, settings));
    if let Some(warning) = &report.warning {
        println!();
        println!("{}", format_budget_warning(warning, settings));
    }

    Ok(())
}
