use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_history_command, handle_report_command, handle_transaction_command, HistoryArgs,
    ReportArgs, TransactionCommands,
};
use pocket_ledger::config::paths::DATA_DIR_ENV;
use pocket_ledger::config::{PocketPaths, Settings};
use pocket_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Command-line income and expense tracker",
    long_about = "pocket records income and expense entries, lists and filters them, \
                  computes your balance, and prints monthly reports. Data is kept \
                  in a single JSON file under the data directory."
)]
struct Cli {
    /// Directory holding data, settings and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Generate a financial report for one month
    Report(ReportArgs),

    /// Show recently recorded transactions from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PocketPaths::with_base_dir(dir),
        None => PocketPaths::new()?,
    };
    let settings = Settings::load(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&mut storage, &settings, cmd)?;
        }
        Commands::Report(args) => {
            handle_report_command(&mut storage, &settings, args)?;
        }
        Commands::History(args) => {
            handle_history_command(&storage, args)?;
        }
        Commands::Config => {
            println!("pocket-ledger configuration");
            println!("===========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit log:       {}", if settings.audit_enabled { "on" } else { "off" });
            println!("  Transactions:    {}", storage.transactions.count());
        }
    }

    Ok(())
}
