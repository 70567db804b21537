//! Expense CLI commands
//!
//! Implements the add, list, show, update and delete commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::LedgerResult;
use crate::models::{ExpenseId, ExpenseUpdate, NewExpense};
use crate::services::ExpenseService;
use crate::storage::LedgerStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,
    /// Amount spent (e.g., "50" or "12.99")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
    /// Category name (defaults to "Uncategorized")
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show expenses in this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for commands that target one expense
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,
}

/// Handle `add`
pub fn handle_add<S: LedgerStore>(store: &S, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(store);

    let mut input = NewExpense::new(args.description, args.amount);
    input.category = args.category;

    let expense = service.add(input)?;
    println!(
        "Added expense #{}: {} ({}) [{}]",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list<S: LedgerStore>(store: &S, settings: &Settings, args: ListArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(store);
    let expenses = service.list(args.category.as_deref())?;

    println!("{}", format_expense_table(&expenses, settings));
    Ok(())
}

/// Handle `show`
pub fn handle_show<S: LedgerStore>(store: &S, settings: &Settings, args: IdArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(store);
    let expense = service.get(args.id)?;

    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

/// Handle `update`
pub fn handle_update<S: LedgerStore>(
    store: &S,
    settings: &Settings,
    args: UpdateArgs,
) -> LedgerResult<()> {
    let service = ExpenseService::new(store);

    let update = ExpenseUpdate {
        description: args.description,
        amount: args.amount,
        category: args.category,
    };
    let expense = service.update(args.id, update)?;
    println!("Updated expense #{}.", expense.id);
    print!("{}", format_expense_details(&expense, settings));

    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: LedgerStore>(store: &S, args: IdArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(store);
    let removed = service.delete(args.id)?;

    println!("Deleted expense #{}: {}", removed.id, removed.description);
    Ok(())
}
