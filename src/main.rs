use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use ledger::cli::{
    handle_add, handle_clear_budget, handle_delete, handle_export, handle_list, handle_set_budget,
    handle_show, handle_summary, handle_update, AddArgs, ExportArgs, IdArgs, ListArgs,
    SetBudgetArgs, SummaryArgs, UpdateArgs,
};
use ledger::config::{LedgerPaths, Settings};
use ledger::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "expense-ledger",
    version,
    about = "Track personal expenses from the command line",
    long_about = "expense-ledger records expenses in a local JSON file, lists and \
                  summarizes them by month and category, warns when a month's \
                  spending exceeds your budget, and exports everything to CSV."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense dated today
    Add(AddArgs),

    /// List expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single expense
    Show(IdArgs),

    /// Change fields of an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(IdArgs),

    /// Summarize spending by category
    Summary(SummaryArgs),

    /// Set the monthly budget
    SetBudget(SetBudgetArgs),

    /// Remove the monthly budget
    ClearBudget,

    /// Export all expenses to CSV
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let mut paths = LedgerPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonFileStore::new(paths.ledger_file());

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&store, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&store, &settings, args)?,
        Some(Commands::Show(args)) => handle_show(&store, &settings, args)?,
        Some(Commands::Update(args)) => handle_update(&store, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete(&store, args)?,
        Some(Commands::Summary(args)) => handle_summary(&store, &settings, args)?,
        Some(Commands::SetBudget(args)) => handle_set_budget(&store, &settings, args)?,
        Some(Commands::ClearBudget) => handle_clear_budget(&store, &settings)?,
        Some(Commands::Export(args)) => handle_export(&store, &settings, args)?,
        Some(Commands::Config) => {
            println!("expense-ledger configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Default export path: {}", settings.default_export_path);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("expense-ledger - personal expense tracking");
            println!();
            println!("Run 'expense-ledger --help' for usage information.");
        }
    }

    Ok(())
}
