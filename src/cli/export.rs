//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::export::export_expenses_to_path;
use crate::services::ExpenseService;
use crate::storage::LedgerStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured export path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export<S: LedgerStore>(
    store: &S,
    settings: &Settings,
    args: ExportArgs,
) -> LedgerResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.default_export_path));

    let service = ExpenseService::new(store);
    let expenses = service.list(None)?;
    let count = export_expenses_to_path(&expenses, &output)?;

    println!("Exported {} expenses to: {}", count, output.display());
    Ok(())
}
