//! Budget CLI commands
//!
//! Sets or clears the monthly spending ceiling used for summary warnings.

use clap::Args;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::services::ExpenseService;
use crate::storage::LedgerStore;

/// Arguments for `set-budget`
#[derive(Args, Debug)]
pub struct SetBudgetArgs {
    /// Monthly budget amount (e.g., "500" or "499.99")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle `set-budget`
pub fn handle_set_budget<S: LedgerStore>(
    store: &S,
    settings: &Settings,
    args: SetBudgetArgs,
) -> LedgerResult<()> {
    let service = ExpenseService::new(store);
    let budget = service.set_budget(&args.amount)?;

    println!(
        "Monthly budget set to {}",
        budget.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `clear-budget`
pub fn handle_clear_budget<S: LedgerStore>(store: &S, settings: &Settings) -> LedgerResult<()> {
    let service = ExpenseService::new(store);

    match service.clear_budget()? {
        Some(previous) => println!(
            "Monthly budget of {} cleared",
            previous.format_with_symbol(&settings.currency_symbol)
        ),
        None => println!("No monthly budget was set"),
    }
    Ok(())
}
